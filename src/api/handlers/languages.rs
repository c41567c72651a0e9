//! Language handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{
    CreateLanguageRequest, LanguageResponse, MessageResponse, PaginationParams,
    UpdateLanguageRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates language routes.
///
/// Routes:
/// - GET /        - List languages
/// - POST /       - Create a new language
/// - GET /{id}    - Get language by ID
/// - PUT /{id}    - Update language by ID
/// - DELETE /{id} - Delete language by ID
pub fn language_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_languages).post(create_language))
        .route(
            "/{id}",
            get(get_language).put(update_language).delete(delete_language),
        )
}

/// GET /api/languages - List languages.
async fn list_languages(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Vec<LanguageResponse>>> {
    let params = pagination.normalize();
    let languages = state
        .services
        .languages
        .list_languages(params.skip, params.limit)
        .await?;
    Ok(Json(
        languages.into_iter().map(LanguageResponse::from).collect(),
    ))
}

/// POST /api/languages - Create a new language.
async fn create_language(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateLanguageRequest>,
) -> AppResult<(StatusCode, Json<LanguageResponse>)> {
    let language = state
        .services
        .languages
        .create_language(payload.into_new_language())
        .await?;
    Ok((StatusCode::CREATED, Json(language.into())))
}

/// GET /api/languages/{id} - Get language by ID.
async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LanguageResponse>> {
    let language = state.services.languages.get_language(id).await?;
    Ok(Json(language.into()))
}

/// PUT /api/languages/{id} - Update a language.
async fn update_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateLanguageRequest>,
) -> AppResult<Json<LanguageResponse>> {
    let language = state
        .services
        .languages
        .update_language(id, payload.into_update_language())
        .await?;
    Ok(Json(language.into()))
}

/// DELETE /api/languages/{id} - Delete a language.
async fn delete_language(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.languages.delete_language(id).await?;
    Ok(Json(MessageResponse::new("Language deleted successfully")))
}
