//! Lesson handlers: CRUD plus the enrollment endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::api::dto::{
    CreateLessonRequest, LessonResponse, MessageResponse, PaginatedResponse, PaginationParams,
    StudentResponse, UpdateLessonRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates lesson routes.
///
/// Routes:
/// - GET /                              - List lessons (paginated)
/// - POST /                             - Create a new lesson
/// - GET /{id}                          - Get lesson by ID
/// - PUT /{id}                          - Update lesson by ID
/// - DELETE /{id}                       - Delete lesson by ID
/// - GET /{id}/students                 - List enrolled students
/// - POST /{id}/students/{student_id}   - Enroll a student
/// - DELETE /{id}/students/{student_id} - Remove a student
pub fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_lessons).post(create_lesson))
        .route(
            "/{id}",
            get(get_lesson).put(update_lesson).delete(delete_lesson),
        )
        .route("/{id}/students", get(list_students_of_lesson))
        .route(
            "/{id}/students/{student_id}",
            post(associate_student).delete(disassociate_student),
        )
}

/// GET /api/lessons - List lessons with pagination metadata.
async fn list_lessons(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<PaginatedResponse<LessonResponse>>> {
    let params = pagination.normalize();
    let (lessons, total) = state
        .services
        .lessons
        .list_lessons(params.skip, params.limit)
        .await?;
    let items = lessons.into_iter().map(LessonResponse::from).collect();
    Ok(Json(PaginatedResponse::new(items, total, &params)))
}

/// POST /api/lessons - Create a new lesson.
async fn create_lesson(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateLessonRequest>,
) -> AppResult<(StatusCode, Json<LessonResponse>)> {
    let lesson = state
        .services
        .lessons
        .create_lesson(payload.into_new_lesson()?)
        .await?;
    Ok((StatusCode::CREATED, Json(lesson.into())))
}

/// GET /api/lessons/{id} - Get lesson by ID.
async fn get_lesson(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LessonResponse>> {
    let lesson = state.services.lessons.get_lesson(id).await?;
    Ok(Json(lesson.into()))
}

/// PUT /api/lessons/{id} - Partially update a lesson.
async fn update_lesson(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateLessonRequest>,
) -> AppResult<Json<LessonResponse>> {
    let lesson = state
        .services
        .lessons
        .update_lesson(id, payload.into_update_lesson()?)
        .await?;
    Ok(Json(lesson.into()))
}

/// DELETE /api/lessons/{id} - Delete a lesson.
async fn delete_lesson(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.lessons.delete_lesson(id).await?;
    Ok(Json(MessageResponse::new("Lesson deleted successfully")))
}

/// GET /api/lessons/{id}/students - List the students enrolled in a lesson.
async fn list_students_of_lesson(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<StudentResponse>>> {
    let students = state.services.lessons.list_students_of_lesson(id).await?;
    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}

/// POST /api/lessons/{id}/students/{student_id} - Enroll a student.
async fn associate_student(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    let message = state
        .services
        .lessons
        .associate_student(id, student_id)
        .await?;
    Ok(Json(MessageResponse::new(message)))
}

/// DELETE /api/lessons/{id}/students/{student_id} - Remove a student.
async fn disassociate_student(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    let message = state
        .services
        .lessons
        .disassociate_student(id, student_id)
        .await?;
    Ok(Json(MessageResponse::new(message)))
}
