//! Daily to-do handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{
    CreateTodoRequest, MessageResponse, PaginatedResponse, PaginationParams, TodoListFilter,
    TodoResponse, UpdateTodoRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates to-do routes.
///
/// Routes:
/// - GET /        - List to-dos (paginated, optional owner filter)
/// - POST /       - Create a new to-do
/// - GET /{id}    - Get to-do by ID
/// - PUT /{id}    - Update to-do by ID
/// - DELETE /{id} - Delete to-do by ID
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}", get(get_todo).put(update_todo).delete(delete_todo))
}

/// GET /api/todos - List to-dos with pagination metadata.
async fn list_todos(
    State(state): State<AppState>,
    Query(filter): Query<TodoListFilter>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<PaginatedResponse<TodoResponse>>> {
    let params = pagination.normalize();
    let (todos, total) = state
        .services
        .todos
        .list_todos(filter.administrator_id, params.skip, params.limit)
        .await?;
    let items = todos.into_iter().map(TodoResponse::from).collect();
    Ok(Json(PaginatedResponse::new(items, total, &params)))
}

/// POST /api/todos - Create a new to-do.
async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTodoRequest>,
) -> AppResult<(StatusCode, Json<TodoResponse>)> {
    let todo = state
        .services
        .todos
        .create_todo(payload.into_new_todo())
        .await?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// GET /api/todos/{id} - Get to-do by ID.
async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<TodoResponse>> {
    let todo = state.services.todos.get_todo(id).await?;
    Ok(Json(todo.into()))
}

/// PUT /api/todos/{id} - Partially update a to-do.
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTodoRequest>,
) -> AppResult<Json<TodoResponse>> {
    let todo = state
        .services
        .todos
        .update_todo(id, payload.into_update_todo())
        .await?;
    Ok(Json(todo.into()))
}

/// DELETE /api/todos/{id} - Delete a to-do.
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.todos.delete_todo(id).await?;
    Ok(Json(MessageResponse::new("To-do deleted successfully")))
}
