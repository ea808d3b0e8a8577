//! Publisher entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tailspin_core::types::{DbId, Timestamp};

/// A publisher row from the `publishers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Publisher {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Publisher projection returned by list/get endpoints.
///
/// `game_count` is computed at query time from the games relationship; it is
/// never stored, so it is always current. A publisher with no games reports 0.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublisherSummary {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub game_count: i64,
}

/// DTO for creating a new publisher.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePublisher {
    pub name: String,
    pub description: Option<String>,
}
