use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize the catalog database pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: Migrations directory (default: "infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or migrations fail
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(5);
    let migrations_path = env::var("DATABASE_MIGRATIONS_PATH")
        .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &migrations_path).await?;

    Ok(pool)
}
