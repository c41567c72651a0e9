//! Administrator management handlers.

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{
    AdministratorResponse, CreateAdministratorRequest, MessageResponse, PaginationParams,
};
use crate::api::middleware::AuthAdmin;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates administrator routes.
///
/// Routes:
/// - GET /          - List administrators
/// - POST /         - Create a new administrator
/// - GET /me        - Get the authenticated administrator
/// - GET /{id}      - Get administrator by ID
/// - DELETE /{id}   - Delete administrator by ID
pub fn administrator_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_administrators).post(create_administrator))
        .route("/me", get(current_administrator))
        .route("/{id}", get(get_administrator).delete(delete_administrator))
}

/// GET /api/administrators - List administrators.
async fn list_administrators(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Vec<AdministratorResponse>>> {
    let params = pagination.normalize();
    let admins = state
        .services
        .administrators
        .list_administrators(params.skip, params.limit)
        .await?;
    Ok(Json(
        admins.into_iter().map(AdministratorResponse::from).collect(),
    ))
}

/// POST /api/administrators - Create a new administrator.
async fn create_administrator(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAdministratorRequest>,
) -> AppResult<(StatusCode, Json<AdministratorResponse>)> {
    let admin = state
        .services
        .administrators
        .create_administrator(payload.name, payload.password)
        .await?;
    Ok((StatusCode::CREATED, Json(admin.into())))
}

/// GET /api/administrators/me - The authenticated administrator.
async fn current_administrator(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
) -> AppResult<Json<AdministratorResponse>> {
    let admin = state
        .services
        .administrators
        .get_administrator(auth.admin_id)
        .await?;
    Ok(Json(admin.into()))
}

/// GET /api/administrators/{id} - Get administrator by ID.
async fn get_administrator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AdministratorResponse>> {
    let admin = state.services.administrators.get_administrator(id).await?;
    Ok(Json(admin.into()))
}

/// DELETE /api/administrators/{id} - Delete administrator by ID.
async fn delete_administrator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .administrators
        .delete_administrator(id)
        .await?;
    Ok(Json(MessageResponse::new(
        "Administrator deleted successfully",
    )))
}
