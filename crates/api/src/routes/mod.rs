pub mod categories;
pub mod games;
pub mod health;
pub mod publishers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                   list (filterable), create
/// /games/{id}              get
/// /publishers              list, create
/// /publishers/{id}         get
/// /categories              list, create
/// /categories/{id}         get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .nest("/publishers", publishers::router())
        .nest("/categories", categories::router())
}
