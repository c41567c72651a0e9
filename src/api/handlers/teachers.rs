//! Teacher handlers: CRUD plus the teacher-side association endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::api::dto::{
    CreateTeacherRequest, MessageResponse, PaginatedResponse, PaginationParams, StudentResponse,
    TeacherResponse, UpdateTeacherRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates teacher routes.
///
/// Routes:
/// - GET /                              - List teachers (paginated)
/// - POST /                             - Create a new teacher
/// - GET /{id}                          - Get teacher by ID
/// - PUT /{id}                          - Update teacher by ID
/// - DELETE /{id}                       - Delete teacher by ID
/// - GET /{id}/students                 - List the teacher's students
/// - POST /{id}/students/{student_id}   - Associate a student
/// - DELETE /{id}/students/{student_id} - Disassociate a student
pub fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers).post(create_teacher))
        .route(
            "/{id}",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
        .route("/{id}/students", get(list_students_of_teacher))
        .route(
            "/{id}/students/{student_id}",
            post(associate_student).delete(disassociate_student),
        )
}

/// GET /api/teachers - List teachers with pagination metadata.
async fn list_teachers(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<PaginatedResponse<TeacherResponse>>> {
    let params = pagination.normalize();
    let (teachers, total) = state
        .services
        .teachers
        .list_teachers(params.skip, params.limit)
        .await?;
    let items = teachers.into_iter().map(TeacherResponse::from).collect();
    Ok(Json(PaginatedResponse::new(items, total, &params)))
}

/// POST /api/teachers - Create a new teacher.
async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTeacherRequest>,
) -> AppResult<(StatusCode, Json<TeacherResponse>)> {
    let teacher = state
        .services
        .teachers
        .create_teacher(payload.into_new_teacher())
        .await?;
    Ok((StatusCode::CREATED, Json(teacher.into())))
}

/// GET /api/teachers/{id} - Get teacher by ID.
async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<TeacherResponse>> {
    let teacher = state.services.teachers.get_teacher(id).await?;
    Ok(Json(teacher.into()))
}

/// PUT /api/teachers/{id} - Partially update a teacher.
async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTeacherRequest>,
) -> AppResult<Json<TeacherResponse>> {
    let teacher = state
        .services
        .teachers
        .update_teacher(id, payload.into_update_teacher())
        .await?;
    Ok(Json(teacher.into()))
}

/// DELETE /api/teachers/{id} - Delete a teacher.
async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.teachers.delete_teacher(id).await?;
    Ok(Json(MessageResponse::new("Teacher deleted successfully")))
}

/// GET /api/teachers/{id}/students - List the teacher's students.
async fn list_students_of_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<StudentResponse>>> {
    let students = state.services.teachers.list_students_of_teacher(id).await?;
    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}

/// POST /api/teachers/{id}/students/{student_id} - Associate a student.
async fn associate_student(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    let message = state
        .services
        .teachers
        .associate_student(id, student_id)
        .await?;
    Ok(Json(MessageResponse::new(message)))
}

/// DELETE /api/teachers/{id}/students/{student_id} - Disassociate a student.
async fn disassociate_student(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    let message = state
        .services
        .teachers
        .disassociate_student(id, student_id)
        .await?;
    Ok(Json(MessageResponse::new(message)))
}
