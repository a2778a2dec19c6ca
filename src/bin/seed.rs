//! Out-of-band database seeding, run manually: `cargo run --bin seed`.

use anyhow::Context;
use sea_orm::Database;
use std::env;

use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set in .env file")?;

    let conn = Database::connect(db_url)
        .await
        .context("Failed to connect to database")?;

    warn!(
        "Only the profile step is idempotent: re-running duplicates skills, \
         experiences, education, projects and settings"
    );

    portfolio_api::seed::run(&conn).await?;

    Ok(())
}
