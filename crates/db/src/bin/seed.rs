//! Seed binary: applies migrations and inserts the sample catalog.
//!
//! Usage: `DATABASE_URL=postgres://... cargo run -p tailspin-db --bin tailspin-seed`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tailspin_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = tailspin_db::create_pool(&database_url).await?;

    tailspin_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    let report = tailspin_db::seed::seed_catalog(&pool).await?;
    tracing::info!(
        publishers = report.publishers,
        categories = report.categories,
        games = report.games,
        "Seed complete"
    );

    Ok(())
}
