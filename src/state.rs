//! Application state for the Axum web framework.
//!
//! Contains shared services and resources that are accessible across all
//! request handlers. Configuration is loaded once and passed in here; no
//! module-level singletons.

use crate::config::JwtConfig;
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Designed to be used with Axum's State extractor. Cloning is cheap
/// since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
    /// JWT configuration for token generation and validation
    pub jwt_config: JwtConfig,
}

impl AppState {
    /// Creates a new AppState from a database connection pool and JWT
    /// config, initializing all repositories and services.
    pub fn new(pool: AsyncDbPool, jwt_config: JwtConfig) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos);
        Self {
            services,
            db_pool: pool,
            jwt_config,
        }
    }
}
