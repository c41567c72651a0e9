//! Tuition status handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{
    CreateTuitionStatusRequest, PaginatedResponse, PaginationParams, TuitionListFilter,
    TuitionStatusResponse, TuitionTotalsResponse, UpdateTuitionStatusRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates tuition status routes.
///
/// Routes:
/// - GET /                          - List tuition statuses (filters + pagination)
/// - POST /                         - Create a new tuition status
/// - GET /pending                   - Pending or late rows, most overdue first
/// - GET /totals                    - Totals per status label
/// - GET /student/{student_id}      - All rows of one student
/// - GET /month/{month}/year/{year} - Rows of one calendar month
/// - GET /{id}                      - Get tuition status by ID
/// - PUT /{id}                      - Update tuition status by ID
/// - DELETE /{id}                   - Delete tuition status by ID
pub fn tuition_status_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tuition_statuses).post(create_tuition_status))
        .route("/pending", get(list_pending_or_late))
        .route("/totals", get(totals_by_status))
        .route("/student/{student_id}", get(list_by_student))
        .route("/month/{month}/year/{year}", get(list_by_month_year))
        .route(
            "/{id}",
            get(get_tuition_status)
                .put(update_tuition_status)
                .delete(delete_tuition_status),
        )
}

/// GET /api/tuition-statuses - List with optional filters.
async fn list_tuition_statuses(
    State(state): State<AppState>,
    Query(filter): Query<TuitionListFilter>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<PaginatedResponse<TuitionStatusResponse>>> {
    let params = pagination.normalize();
    let (rows, total) = state
        .services
        .tuition_statuses
        .list_tuition_statuses(filter.into(), params.skip, params.limit)
        .await?;
    let items = rows.into_iter().map(TuitionStatusResponse::from).collect();
    Ok(Json(PaginatedResponse::new(items, total, &params)))
}

/// POST /api/tuition-statuses - Create a tuition status for a student.
async fn create_tuition_status(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTuitionStatusRequest>,
) -> AppResult<(StatusCode, Json<TuitionStatusResponse>)> {
    let row = state
        .services
        .tuition_statuses
        .create_tuition_status(payload.into_new_tuition_status())
        .await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /api/tuition-statuses/pending - Pending or late rows, date ascending.
async fn list_pending_or_late(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TuitionStatusResponse>>> {
    let rows = state.services.tuition_statuses.list_pending_or_late().await?;
    Ok(Json(
        rows.into_iter().map(TuitionStatusResponse::from).collect(),
    ))
}

/// GET /api/tuition-statuses/totals - Totals per status label.
async fn totals_by_status(
    State(state): State<AppState>,
    Query(filter): Query<TuitionListFilter>,
) -> AppResult<Json<TuitionTotalsResponse>> {
    let totals = state
        .services
        .tuition_statuses
        .totals_by_status(filter.month, filter.year)
        .await?;
    Ok(Json(totals.into()))
}

/// GET /api/tuition-statuses/student/{student_id} - One student's rows.
async fn list_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> AppResult<Json<Vec<TuitionStatusResponse>>> {
    let rows = state
        .services
        .tuition_statuses
        .list_by_student(student_id)
        .await?;
    Ok(Json(
        rows.into_iter().map(TuitionStatusResponse::from).collect(),
    ))
}

/// GET /api/tuition-statuses/month/{month}/year/{year} - One calendar month.
async fn list_by_month_year(
    State(state): State<AppState>,
    Path((month, year)): Path<(u32, i32)>,
) -> AppResult<Json<Vec<TuitionStatusResponse>>> {
    let rows = state
        .services
        .tuition_statuses
        .list_by_month_year(month, year)
        .await?;
    Ok(Json(
        rows.into_iter().map(TuitionStatusResponse::from).collect(),
    ))
}

/// GET /api/tuition-statuses/{id} - Get tuition status by ID.
async fn get_tuition_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<TuitionStatusResponse>> {
    let row = state.services.tuition_statuses.get_tuition_status(id).await?;
    Ok(Json(row.into()))
}

/// PUT /api/tuition-statuses/{id} - Partially update a tuition status.
async fn update_tuition_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTuitionStatusRequest>,
) -> AppResult<Json<TuitionStatusResponse>> {
    let row = state
        .services
        .tuition_statuses
        .update_tuition_status(id, payload.into_update_tuition_status())
        .await?;
    Ok(Json(row.into()))
}

/// DELETE /api/tuition-statuses/{id} - Delete a tuition status.
async fn delete_tuition_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state
        .services
        .tuition_statuses
        .delete_tuition_status(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
