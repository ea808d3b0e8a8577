//! Handlers for the `/games` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use tailspin_core::catalog;
use tailspin_core::error::CoreError;
use tailspin_core::types::DbId;
use tailspin_db::models::game::{CreateGame, GameDetail, GameFilter};
use tailspin_db::repositories::{CategoryRepo, GameRepo, PublisherRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for listing games.
///
/// Both ids arrive as raw strings so that malformed values can be ignored
/// instead of failing extraction; see [`parse_id_param`].
#[derive(Debug, Deserialize)]
pub struct GameListParams {
    pub category_id: Option<String>,
    pub publisher_id: Option<String>,
}

/// Parse an optional id parameter leniently.
///
/// Only non-empty, digit-only values count as integers; anything else
/// (including signed values like `-1`) is treated as absent and the listing
/// falls back to unfiltered for that parameter rather than returning an
/// error. This mirrors the long-standing behaviour clients depend on;
/// tightening it to a 400 would need a coordinated change.
fn parse_id_param(value: Option<&str>) -> Option<DbId> {
    value
        .filter(|v| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|v| v.parse().ok())
}

/// GET /api/games
///
/// Lists games with their publisher and category references, optionally
/// restricted by `category_id` and/or `publisher_id` (AND semantics).
/// An id that matches nothing yields `200 []`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GameListParams>,
) -> AppResult<Json<Vec<GameDetail>>> {
    let filter = GameFilter {
        category_id: parse_id_param(params.category_id.as_deref()),
        publisher_id: parse_id_param(params.publisher_id.as_deref()),
    };
    let games = GameRepo::list(&state.pool, &filter).await?;
    tracing::debug!(count = games.len(), ?filter, "Listed games");
    Ok(Json(games))
}

/// GET /api/games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GameDetail>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;
    Ok(Json(game))
}

/// POST /api/games
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGame>,
) -> AppResult<(StatusCode, Json<GameDetail>)> {
    catalog::validate_game_title(&input.title)?;
    catalog::validate_description(input.description.as_deref())?;
    catalog::validate_star_rating(input.star_rating)?;

    ensure_publisher_exists(&state.pool, input.publisher_id).await?;
    ensure_category_exists(&state.pool, input.category_id).await?;

    let created = GameRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, title = %created.title, "Game created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Verify that the referenced publisher exists.
async fn ensure_publisher_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    PublisherRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Publisher",
            id,
        }))?;
    Ok(())
}

/// Verify that the referenced category exists.
async fn ensure_category_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    CategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(())
}
