//! Route definitions for the games resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET  /       -> list (supports ?category_id= and ?publisher_id=)
/// POST /       -> create
/// GET  /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list).post(games::create))
        .route("/{id}", get(games::get_by_id))
}
