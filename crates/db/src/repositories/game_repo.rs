//! Repository for the `games` table.
//!
//! Every read goes through the same base query joining publishers and
//! categories, so each returned game carries its owning publisher and
//! category references.

use sqlx::PgPool;
use tailspin_core::types::DbId;

use crate::models::game::{CreateGame, GameDetail, GameFilter, GameRow};

/// Base query for game reads: one flat row per game with the owning
/// publisher and category joined in.
const GAME_SELECT: &str = "\
    SELECT g.id, g.title, g.description, g.star_rating, \
           p.id AS publisher_id, p.name AS publisher_name, \
           c.id AS category_id, c.name AS category_name \
    FROM games g \
    JOIN publishers p ON p.id = g.publisher_id \
    JOIN categories c ON c.id = g.category_id";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// List games, optionally restricted by category and/or publisher.
    ///
    /// Absent filters impose no restriction; present filters combine with
    /// AND. An id that matches nothing yields an empty list, not an error.
    pub async fn list(pool: &PgPool, filter: &GameFilter) -> Result<Vec<GameDetail>, sqlx::Error> {
        let query = format!(
            "{GAME_SELECT} \
             WHERE ($1::bigint IS NULL OR g.category_id = $1) \
               AND ($2::bigint IS NULL OR g.publisher_id = $2) \
             ORDER BY g.id"
        );
        let rows = sqlx::query_as::<_, GameRow>(&query)
            .bind(filter.category_id)
            .bind(filter.publisher_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(GameDetail::from).collect())
    }

    /// Find a game by ID with its publisher and category references.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GameDetail>, sqlx::Error> {
        let query = format!("{GAME_SELECT} WHERE g.id = $1");
        let row = sqlx::query_as::<_, GameRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(GameDetail::from))
    }

    /// Insert a new game and return its joined projection.
    ///
    /// The caller is expected to have verified the referenced publisher and
    /// category exist; a dangling reference surfaces as a database error.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<GameDetail, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO games (title, description, star_rating, publisher_id, category_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(input.description.as_deref())
        .bind(input.star_rating)
        .bind(input.publisher_id)
        .bind(input.category_id)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}
