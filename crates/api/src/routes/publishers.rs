//! Route definitions for the publishers resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::publishers;
use crate::state::AppState;

/// Routes mounted at `/publishers`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(publishers::list).post(publishers::create))
        .route("/{id}", get(publishers::get_by_id))
}
