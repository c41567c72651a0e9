//! Async database connection pool implementation.
//!
//! Uses bb8 connection pool manager with diesel_async for PostgreSQL
//! connections, sized from [`DatabaseConfig`].

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::config::DatabaseConfig;
use crate::error::AppError;

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap (just reference count
/// increment). Structures holding AsyncDbPool can derive Clone without
/// additional Arc wrapping.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Embedded SQL migrations from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Creates an async database connection pool from configuration.
///
/// # Errors
///
/// Returns `AppError::ConnectionPool` if the pool cannot be built.
pub async fn establish_async_connection_pool(
    config: &DatabaseConfig,
) -> Result<AsyncDbPool, AppError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.url.clone());
    let pool = Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
        .await
        .map_err(|e| AppError::ConnectionPool {
            source: anyhow::Error::new(e),
        })?;
    Ok(pool)
}

/// Runs all pending migrations against the configured database.
///
/// The migration harness is synchronous, so the async connection is
/// wrapped and driven on a blocking thread.
pub async fn run_migrations(database_url: &str) -> Result<(), AppError> {
    let url = database_url.to_string();
    tokio::task::spawn_blocking(move || {
        use diesel::Connection;

        let mut conn =
            AsyncConnectionWrapper::<AsyncPgConnection>::establish(&url).map_err(|e| {
                AppError::Database {
                    operation: "connect for migrations".to_string(),
                    source: anyhow::Error::new(e),
                }
            })?;

        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| {
                tracing::info!(applied = versions.len(), "Migrations up to date");
            })
            .map_err(|e| AppError::Database {
                operation: "run pending migrations".to_string(),
                source: anyhow::anyhow!("{}", e),
            })
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::new(e),
    })?
}
