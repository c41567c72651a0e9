//! Receivable handlers, always scoped to the authenticated administrator.

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
};
use bigdecimal::ToPrimitive;

use crate::api::dto::{
    CreateReceivableRequest, MessageResponse, PaginatedResponse, PaginationParams,
    ReceivableResponse, SettledFilter, TotalResponse, UpdateReceivableRequest,
};
use crate::api::middleware::AuthAdmin;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates receivable routes.
///
/// Routes:
/// - GET /                - List the owner's receivables (paginated, settled filter)
/// - POST /               - Create a new receivable owned by the caller
/// - GET /total           - Aggregate amount (optional settled filter)
/// - GET /{id}            - Get receivable by ID (ownership enforced)
/// - PUT /{id}            - Update receivable by ID
/// - PATCH /{id}/settle   - Mark as received
/// - PATCH /{id}/unsettle - Mark back as pending
/// - DELETE /{id}         - Delete receivable by ID
pub fn receivable_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_receivables).post(create_receivable))
        .route("/total", get(total_receivable))
        .route(
            "/{id}",
            get(get_receivable)
                .put(update_receivable)
                .delete(delete_receivable),
        )
        .route("/{id}/settle", patch(mark_settled))
        .route("/{id}/unsettle", patch(mark_pending))
}

/// GET /api/receivables - List the caller's receivables.
async fn list_receivables(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Query(filter): Query<SettledFilter>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<PaginatedResponse<ReceivableResponse>>> {
    let params = pagination.normalize();
    let (receivables, total) = state
        .services
        .receivables
        .list_receivables(auth.admin_id, filter.settled, params.skip, params.limit)
        .await?;
    let items = receivables
        .into_iter()
        .map(ReceivableResponse::from)
        .collect();
    Ok(Json(PaginatedResponse::new(items, total, &params)))
}

/// POST /api/receivables - Create a receivable owned by the caller.
async fn create_receivable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    ValidatedJson(payload): ValidatedJson<CreateReceivableRequest>,
) -> AppResult<(StatusCode, Json<ReceivableResponse>)> {
    let receivable = state
        .services
        .receivables
        .create_receivable(payload.into_new_receivable(auth.admin_id)?)
        .await?;
    Ok((StatusCode::CREATED, Json(receivable.into())))
}

/// GET /api/receivables/total - Aggregate receivable amount for the caller.
async fn total_receivable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Query(filter): Query<SettledFilter>,
) -> AppResult<Json<TotalResponse>> {
    let total = state
        .services
        .receivables
        .total(auth.admin_id, filter.settled)
        .await?;
    Ok(Json(TotalResponse {
        total: total.to_f64().unwrap_or(0.0),
    }))
}

/// GET /api/receivables/{id} - Get an owned receivable.
async fn get_receivable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReceivableResponse>> {
    let receivable = state
        .services
        .receivables
        .get_receivable(id, auth.admin_id)
        .await?;
    Ok(Json(receivable.into()))
}

/// PUT /api/receivables/{id} - Partially update an owned receivable.
async fn update_receivable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateReceivableRequest>,
) -> AppResult<Json<ReceivableResponse>> {
    let receivable = state
        .services
        .receivables
        .update_receivable(id, auth.admin_id, payload.into_update_receivable()?)
        .await?;
    Ok(Json(receivable.into()))
}

/// PATCH /api/receivables/{id}/settle - Mark an owned receivable as received.
async fn mark_settled(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReceivableResponse>> {
    let receivable = state
        .services
        .receivables
        .mark_settled(id, auth.admin_id)
        .await?;
    Ok(Json(receivable.into()))
}

/// PATCH /api/receivables/{id}/unsettle - Mark an owned receivable as pending.
async fn mark_pending(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReceivableResponse>> {
    let receivable = state
        .services
        .receivables
        .mark_pending(id, auth.admin_id)
        .await?;
    Ok(Json(receivable.into()))
}

/// DELETE /api/receivables/{id} - Delete an owned receivable.
async fn delete_receivable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .receivables
        .delete_receivable(id, auth.admin_id)
        .await?;
    Ok(Json(MessageResponse::new("Receivable deleted successfully")))
}
