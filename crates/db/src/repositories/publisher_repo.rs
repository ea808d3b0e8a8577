//! Repository for the `publishers` table.

use sqlx::PgPool;
use tailspin_core::types::DbId;

use crate::models::publisher::{CreatePublisher, Publisher, PublisherSummary};

/// Column list for `publishers` row queries.
const PUBLISHER_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Projection with a live game count. `COUNT(g.id)` over a LEFT JOIN yields 0
/// for publishers without games rather than dropping the row.
const SUMMARY_SELECT: &str = "\
    SELECT p.id, p.name, p.description, COUNT(g.id) AS game_count \
    FROM publishers p \
    LEFT JOIN games g ON g.publisher_id = p.id";

/// Provides CRUD operations for publishers.
pub struct PublisherRepo;

impl PublisherRepo {
    /// List all publishers with their current game counts, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<PublisherSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY p.id ORDER BY p.id");
        sqlx::query_as::<_, PublisherSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a publisher by ID, including its current game count.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PublisherSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE p.id = $1 GROUP BY p.id");
        sqlx::query_as::<_, PublisherSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new publisher.
    ///
    /// A duplicate name violates `uq_publishers_name`; the caller maps that
    /// database error to a conflict response.
    pub async fn create(pool: &PgPool, input: &CreatePublisher) -> Result<Publisher, sqlx::Error> {
        let query = format!(
            "INSERT INTO publishers (name, description) VALUES ($1, $2) \
             RETURNING {PUBLISHER_COLUMNS}"
        );
        sqlx::query_as::<_, Publisher>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .fetch_one(pool)
            .await
    }
}
