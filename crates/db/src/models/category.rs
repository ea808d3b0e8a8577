//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tailspin_core::types::{DbId, Timestamp};

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Category projection returned by list/get endpoints, with a live game count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategorySummary {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub game_count: i64,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
}
