//! Handlers for the `/publishers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use tailspin_core::catalog;
use tailspin_core::error::CoreError;
use tailspin_core::types::DbId;
use tailspin_db::models::publisher::{CreatePublisher, Publisher, PublisherSummary};
use tailspin_db::repositories::PublisherRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/publishers
///
/// Lists every publisher with a live `game_count`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PublisherSummary>>> {
    let publishers = PublisherRepo::list(&state.pool).await?;
    Ok(Json(publishers))
}

/// GET /api/publishers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PublisherSummary>> {
    let publisher = PublisherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Publisher",
            id,
        }))?;
    Ok(Json(publisher))
}

/// POST /api/publishers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePublisher>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    catalog::validate_publisher_name(&input.name)?;
    catalog::validate_description(input.description.as_deref())?;

    let created = PublisherRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Publisher created");
    Ok((StatusCode::CREATED, Json(created)))
}
