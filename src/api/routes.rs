//! Router configuration for the API.
//!
//! Centralized route registration and middleware wiring. All routes
//! except authentication and the health check sit behind the bearer
//! token middleware.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::api::middleware::{auth_middleware, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): the request ID middleware runs first so the logging middleware
/// can correlate entries, and the auth middleware only wraps the
/// protected route groups.
///
/// # Routes
/// - `/api/auth` - Login, registration, token refresh (public)
/// - `/api/health` - Liveness check (public)
/// - `/api/administrators`, `/api/languages`, `/api/students`,
///   `/api/teachers`, `/api/lessons`, `/api/todos`, `/api/wallets`,
///   `/api/payables`, `/api/receivables`, `/api/tuition-statuses`
///   (bearer token required)
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .nest("/auth", handlers::auth::auth_routes())
        .nest("/health", handlers::health::health_routes());

    let protected_routes = Router::new()
        .nest(
            "/administrators",
            handlers::administrators::administrator_routes(),
        )
        .nest("/languages", handlers::languages::language_routes())
        .nest("/students", handlers::students::student_routes())
        .nest("/teachers", handlers::teachers::teacher_routes())
        .nest("/lessons", handlers::lessons::lesson_routes())
        .nest("/todos", handlers::todos::todo_routes())
        .nest("/wallets", handlers::wallets::wallet_routes())
        .nest("/payables", handlers::payables::payable_routes())
        .nest("/receivables", handlers::receivables::receivable_routes())
        .nest(
            "/tuition-statuses",
            handlers::tuition_statuses::tuition_status_routes(),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first,
        // so logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
