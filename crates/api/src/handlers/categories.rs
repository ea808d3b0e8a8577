//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use tailspin_core::catalog;
use tailspin_core::error::CoreError;
use tailspin_core::types::DbId;
use tailspin_db::models::category::{Category, CategorySummary, CreateCategory};
use tailspin_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/categories
///
/// Lists every category with a live `game_count`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CategorySummary>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CategorySummary>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    catalog::validate_category_name(&input.name)?;
    catalog::validate_description(input.description.as_deref())?;

    let created = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Category created");
    Ok((StatusCode::CREATED, Json(created)))
}
