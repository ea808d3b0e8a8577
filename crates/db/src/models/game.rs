//! Game entity model, DTOs, and the joined projection served over the wire.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tailspin_core::types::DbId;

/// Flat row produced by the games base query (games joined to publishers and
/// categories). Internal to the repository; [`GameDetail`] is the wire shape.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub star_rating: Option<f64>,
    pub publisher_id: DbId,
    pub publisher_name: String,
    pub category_id: DbId,
    pub category_name: String,
}

/// Reference to an owning publisher or category, nested inside a game object.
#[derive(Debug, Clone, Serialize)]
pub struct EntityRef {
    pub id: DbId,
    pub name: String,
}

/// Game projection returned by list/get endpoints.
///
/// `star_rating` serializes as `starRating` per the catalog wire format.
#[derive(Debug, Clone, Serialize)]
pub struct GameDetail {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "starRating")]
    pub star_rating: Option<f64>,
    pub publisher: EntityRef,
    pub category: EntityRef,
}

impl From<GameRow> for GameDetail {
    fn from(row: GameRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            star_rating: row.star_rating,
            publisher: EntityRef {
                id: row.publisher_id,
                name: row.publisher_name,
            },
            category: EntityRef {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}

/// DTO for creating a new game.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGame {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "starRating")]
    pub star_rating: Option<f64>,
    pub publisher_id: DbId,
    pub category_id: DbId,
}

/// Foreign-key equality filters for the games listing. `None` means no
/// restriction for that key; both present combine with AND.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameFilter {
    pub category_id: Option<DbId>,
    pub publisher_id: Option<DbId>,
}
