//! Payable handlers, always scoped to the authenticated administrator.

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
};
use bigdecimal::ToPrimitive;

use crate::api::dto::{
    CreatePayableRequest, MessageResponse, PaginatedResponse, PaginationParams, PayableResponse,
    SettledFilter, TotalResponse, UpdatePayableRequest,
};
use crate::api::middleware::AuthAdmin;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates payable routes.
///
/// Routes:
/// - GET /                - List the owner's payables (paginated, settled filter)
/// - POST /               - Create a new payable owned by the caller
/// - GET /total           - Aggregate amount (optional settled filter)
/// - GET /{id}            - Get payable by ID (ownership enforced)
/// - PUT /{id}            - Update payable by ID
/// - PATCH /{id}/settle   - Mark as settled
/// - PATCH /{id}/unsettle - Mark back as pending
/// - DELETE /{id}         - Delete payable by ID
pub fn payable_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payables).post(create_payable))
        .route("/total", get(total_payable))
        .route(
            "/{id}",
            get(get_payable).put(update_payable).delete(delete_payable),
        )
        .route("/{id}/settle", patch(mark_settled))
        .route("/{id}/unsettle", patch(mark_pending))
}

/// GET /api/payables - List the caller's payables.
async fn list_payables(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Query(filter): Query<SettledFilter>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<PaginatedResponse<PayableResponse>>> {
    let params = pagination.normalize();
    let (payables, total) = state
        .services
        .payables
        .list_payables(auth.admin_id, filter.settled, params.skip, params.limit)
        .await?;
    let items = payables.into_iter().map(PayableResponse::from).collect();
    Ok(Json(PaginatedResponse::new(items, total, &params)))
}

/// POST /api/payables - Create a payable owned by the caller.
async fn create_payable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    ValidatedJson(payload): ValidatedJson<CreatePayableRequest>,
) -> AppResult<(StatusCode, Json<PayableResponse>)> {
    let payable = state
        .services
        .payables
        .create_payable(payload.into_new_payable(auth.admin_id)?)
        .await?;
    Ok((StatusCode::CREATED, Json(payable.into())))
}

/// GET /api/payables/total - Aggregate payable amount for the caller.
async fn total_payable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Query(filter): Query<SettledFilter>,
) -> AppResult<Json<TotalResponse>> {
    let total = state
        .services
        .payables
        .total(auth.admin_id, filter.settled)
        .await?;
    Ok(Json(TotalResponse {
        total: total.to_f64().unwrap_or(0.0),
    }))
}

/// GET /api/payables/{id} - Get an owned payable.
async fn get_payable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> AppResult<Json<PayableResponse>> {
    let payable = state
        .services
        .payables
        .get_payable(id, auth.admin_id)
        .await?;
    Ok(Json(payable.into()))
}

/// PUT /api/payables/{id} - Partially update an owned payable.
async fn update_payable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePayableRequest>,
) -> AppResult<Json<PayableResponse>> {
    let payable = state
        .services
        .payables
        .update_payable(id, auth.admin_id, payload.into_update_payable()?)
        .await?;
    Ok(Json(payable.into()))
}

/// PATCH /api/payables/{id}/settle - Mark an owned payable as settled.
async fn mark_settled(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> AppResult<Json<PayableResponse>> {
    let payable = state
        .services
        .payables
        .mark_settled(id, auth.admin_id)
        .await?;
    Ok(Json(payable.into()))
}

/// PATCH /api/payables/{id}/unsettle - Mark an owned payable as pending.
async fn mark_pending(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> AppResult<Json<PayableResponse>> {
    let payable = state
        .services
        .payables
        .mark_pending(id, auth.admin_id)
        .await?;
    Ok(Json(payable.into()))
}

/// DELETE /api/payables/{id} - Delete an owned payable.
async fn delete_payable(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .payables
        .delete_payable(id, auth.admin_id)
        .await?;
    Ok(Json(MessageResponse::new("Payable deleted successfully")))
}
