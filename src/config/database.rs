//! PostgreSQL connection pool initialization.
//!
//! The connection string comes from `DATABASE_URL` when set. Otherwise it is
//! assembled from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, and
//! `DB_NAME`, all of which are then required. Startup fails with a
//! descriptive error when neither form is complete.

use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;

fn database_url() -> anyhow::Result<String> {
    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    let host = env::var("DB_HOST").context("DATABASE_URL or DB_HOST must be set")?;
    let port = env::var("DB_PORT").context("DB_PORT must be set")?;
    let user = env::var("DB_USER").context("DB_USER must be set")?;
    let password = env::var("DB_PASSWORD").context("DB_PASSWORD must be set")?;
    let name = env::var("DB_NAME").context("DB_NAME must be set")?;

    Ok(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
}

/// Connect a pool and verify the database is reachable. Called once during
/// startup; the pool is cheaply cloneable and lives in the application state.
pub async fn init_db_pool() -> anyhow::Result<PgPool> {
    let url = database_url()?;

    PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .context("failed to connect to database")
}
