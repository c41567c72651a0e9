//! Server module for managing HTTP server lifecycle
//!
//! Handles server initialization, startup, and graceful shutdown.

use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::{Environment, Settings};
use crate::db::{establish_async_connection_pool, run_migrations};
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    /// Create a new server with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Logs startup information
    /// 2. Initializes the database connection pool (optionally migrating)
    /// 3. Creates application state
    /// 4. Binds to the configured address
    /// 5. Starts the HTTP server with graceful shutdown
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %Environment::from_env().as_str(),
            "Application starting"
        );

        tracing::info!(
            host = %self.settings.server.host,
            port = %self.settings.server.port,
            "Server configuration loaded"
        );

        // Log database configuration (without the sensitive URL)
        tracing::info!(
            max_connections = %self.settings.database.max_connections,
            min_connections = %self.settings.database.min_connections,
            connection_timeout = %self.settings.database.connection_timeout,
            auto_migrate = %self.settings.database.auto_migrate,
            "Database configuration loaded"
        );

        // Log JWT configuration (without the secret)
        tracing::info!(
            access_token_expiration = %self.settings.jwt.access_token_expiration,
            refresh_token_expiration = %self.settings.jwt.refresh_token_expiration,
            secret_configured = %(!self.settings.jwt.secret.is_empty()),
            "JWT configuration loaded"
        );

        if self.settings.database.auto_migrate {
            tracing::info!("Running pending migrations...");
            run_migrations(&self.settings.database.url).await?;
        }

        tracing::info!("Initializing database connection pool...");
        let pool = establish_async_connection_pool(&self.settings.database).await?;
        tracing::info!("Database connection pool initialized");

        let state = AppState::new(pool, self.settings.jwt.clone());
        let router = create_router(state);
        tracing::info!("Router configured");

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
