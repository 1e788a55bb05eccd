use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the catalog database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "catalog database connection failed");
            DatabaseError::ConnectionError
        })?;

    tracing::info!(
        max_connections = config.max_connections,
        "catalog database pool ready"
    );
    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!(path = migrations_path, "migrations directory not found");
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "catalog migrations failed");
            DatabaseError::MigrationError
        })
}
