//! Student handlers: CRUD plus the student↔teacher association endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{
    CreateStudentRequest, MessageResponse, PaginationParams, StudentResponse, TeacherResponse,
    UpdateStudentRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates student routes.
///
/// Routes:
/// - GET /                              - List students
/// - POST /                             - Create a new student
/// - GET /{id}                          - Get student by ID
/// - PUT /{id}                          - Update student by ID
/// - DELETE /{id}                       - Delete student (tuition rows cascade)
/// - GET /{id}/teachers                 - List the student's teachers
/// - POST /{id}/teachers/{teacher_id}   - Associate a teacher
/// - DELETE /{id}/teachers/{teacher_id} - Disassociate a teacher
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/{id}/teachers", get(list_teachers_of_student))
        .route(
            "/{id}/teachers/{teacher_id}",
            axum::routing::post(associate_teacher).delete(disassociate_teacher),
        )
}

/// GET /api/students - List students.
async fn list_students(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Vec<StudentResponse>>> {
    let params = pagination.normalize();
    let students = state
        .services
        .students
        .list_students(params.skip, params.limit)
        .await?;
    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}

/// POST /api/students - Create a new student.
async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateStudentRequest>,
) -> AppResult<(StatusCode, Json<StudentResponse>)> {
    let student = state
        .services
        .students
        .create_student(payload.into_new_student())
        .await?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

/// GET /api/students/{id} - Get student by ID.
async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<StudentResponse>> {
    let student = state.services.students.get_student(id).await?;
    Ok(Json(student.into()))
}

/// PUT /api/students/{id} - Partially update a student.
async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateStudentRequest>,
) -> AppResult<Json<StudentResponse>> {
    let student = state
        .services
        .students
        .update_student(id, payload.into_update_student())
        .await?;
    Ok(Json(student.into()))
}

/// DELETE /api/students/{id} - Delete a student.
async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.students.delete_student(id).await?;
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

/// GET /api/students/{id}/teachers - List the student's teachers.
async fn list_teachers_of_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<TeacherResponse>>> {
    let teachers = state.services.students.list_teachers_of_student(id).await?;
    Ok(Json(
        teachers.into_iter().map(TeacherResponse::from).collect(),
    ))
}

/// POST /api/students/{id}/teachers/{teacher_id} - Associate a teacher.
async fn associate_teacher(
    State(state): State<AppState>,
    Path((id, teacher_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    let message = state
        .services
        .students
        .associate_teacher(id, teacher_id)
        .await?;
    Ok(Json(MessageResponse::new(message)))
}

/// DELETE /api/students/{id}/teachers/{teacher_id} - Disassociate a teacher.
async fn disassociate_teacher(
    State(state): State<AppState>,
    Path((id, teacher_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    let message = state
        .services
        .students
        .disassociate_teacher(id, teacher_id)
        .await?;
    Ok(Json(MessageResponse::new(message)))
}
