//! Sample catalog seed data.
//!
//! Mirrors the demo dataset the frontend is developed against. Seeding is
//! idempotent per name/title: rows that already exist are left alone, so the
//! seed binary can run repeatedly against the same database.

use sqlx::PgPool;
use tailspin_core::types::DbId;

struct SeedEntity {
    name: &'static str,
    description: &'static str,
}

struct SeedGame {
    title: &'static str,
    description: &'static str,
    star_rating: f64,
    publisher_index: usize,
    category_index: usize,
}

const PUBLISHERS: &[SeedEntity] = &[
    SeedEntity {
        name: "DevGames Inc",
        description: "Leading developer of technology-themed board games",
    },
    SeedEntity {
        name: "Scrum Masters",
        description: "Agile-inspired games for the whole team",
    },
];

const CATEGORIES: &[SeedEntity] = &[
    SeedEntity {
        name: "Strategy",
        description: "Games of planning and long-term thinking",
    },
    SeedEntity {
        name: "Card Game",
        description: "Card-based games for quick sessions",
    },
];

const GAMES: &[SeedGame] = &[
    SeedGame {
        title: "Pipeline Panic",
        description: "Build your DevOps pipeline before chaos ensues",
        star_rating: 4.5,
        publisher_index: 0,
        category_index: 0,
    },
    SeedGame {
        title: "Agile Adventures",
        description: "Navigate your team through sprints and releases",
        star_rating: 4.2,
        publisher_index: 1,
        category_index: 1,
    },
];

/// Counts of rows actually inserted by a seed run.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub publishers: u64,
    pub categories: u64,
    pub games: u64,
}

/// Insert the sample catalog, skipping rows that already exist.
pub async fn seed_catalog(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    let mut publisher_ids = Vec::with_capacity(PUBLISHERS.len());
    for entity in PUBLISHERS {
        let (id, inserted) = upsert_named(pool, "publishers", entity).await?;
        publisher_ids.push(id);
        report.publishers += u64::from(inserted);
    }

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for entity in CATEGORIES {
        let (id, inserted) = upsert_named(pool, "categories", entity).await?;
        category_ids.push(id);
        report.categories += u64::from(inserted);
    }

    for game in GAMES {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM games WHERE title = $1)")
                .bind(game.title)
                .fetch_one(pool)
                .await?;
        if exists {
            continue;
        }

        sqlx::query(
            "INSERT INTO games (title, description, star_rating, publisher_id, category_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(game.title)
        .bind(game.description)
        .bind(game.star_rating)
        .bind(publisher_ids[game.publisher_index])
        .bind(category_ids[game.category_index])
        .execute(pool)
        .await?;
        report.games += 1;
    }

    Ok(report)
}

/// Insert a named row into `publishers` or `categories` unless the name is
/// already taken; return the row id either way.
async fn upsert_named(
    pool: &PgPool,
    table: &str,
    entity: &SeedEntity,
) -> Result<(DbId, bool), sqlx::Error> {
    let existing: Option<DbId> =
        sqlx::query_scalar(&format!("SELECT id FROM {table} WHERE name = $1"))
            .bind(entity.name)
            .fetch_optional(pool)
            .await?;
    if let Some(id) = existing {
        return Ok((id, false));
    }

    let id: DbId = sqlx::query_scalar(&format!(
        "INSERT INTO {table} (name, description) VALUES ($1, $2) RETURNING id"
    ))
    .bind(entity.name)
    .bind(entity.description)
    .fetch_one(pool)
    .await?;
    Ok((id, true))
}
