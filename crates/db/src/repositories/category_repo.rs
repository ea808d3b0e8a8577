//! Repository for the `categories` table.

use sqlx::PgPool;
use tailspin_core::types::DbId;

use crate::models::category::{Category, CategorySummary, CreateCategory};

/// Column list for `categories` row queries.
const CATEGORY_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Projection with a live game count (0 for categories without games).
const SUMMARY_SELECT: &str = "\
    SELECT c.id, c.name, c.description, COUNT(g.id) AS game_count \
    FROM categories c \
    LEFT JOIN games g ON g.category_id = c.id";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories with their current game counts, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategorySummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY c.id ORDER BY c.id");
        sqlx::query_as::<_, CategorySummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a category by ID, including its current game count.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CategorySummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE c.id = $1 GROUP BY c.id");
        sqlx::query_as::<_, CategorySummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new category.
    ///
    /// A duplicate name violates `uq_categories_name`; the caller maps that
    /// database error to a conflict response.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description) VALUES ($1, $2) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .fetch_one(pool)
            .await
    }
}
