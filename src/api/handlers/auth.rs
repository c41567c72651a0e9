//! Authentication handlers for login, registration and token refresh.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::api::dto::{
    LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
    RegisterResponse,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::jwt::{generate_token_pair, validate_refresh_token};
use crate::utils::validate::ValidatedJson;

/// Creates the authentication routes.
///
/// Routes:
/// - `POST /login` - Authenticate an administrator and get tokens
/// - `POST /register` - Register a new administrator and get tokens
/// - `POST /refresh` - Refresh the token pair using a refresh token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/refresh", post(refresh_token))
}

/// POST /api/auth/login - Authenticate with name and password.
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (admin, access_token, refresh_token) = state
        .services
        .administrators
        .authenticate(
            &payload.name,
            &payload.password,
            &state.jwt_config.secret,
            state.jwt_config.access_token_expiration,
            state.jwt_config.refresh_token_expiration,
        )
        .await?;

    Ok(Json(LoginResponse {
        administrator: admin.into(),
        access_token,
        refresh_token,
    }))
}

/// POST /api/auth/register - Register a new administrator account.
async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let admin = state
        .services
        .administrators
        .create_administrator(payload.name, payload.password)
        .await?;

    let (access_token, refresh_token) = generate_token_pair(
        admin.id,
        admin.name.clone(),
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            administrator: admin.into(),
            access_token,
            refresh_token,
        }),
    ))
}

/// POST /api/auth/refresh - Exchange a refresh token for a new pair.
async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenRequest>,
) -> AppResult<Json<RefreshTokenResponse>> {
    let claims = validate_refresh_token(&payload.refresh_token, &state.jwt_config.secret)?;

    let admin_id: i32 = claims.sub.parse().map_err(|_| AppError::Unauthorized {
        message: "Invalid administrator ID in token".to_string(),
    })?;

    // The administrator must still exist
    let admin = state
        .services
        .administrators
        .get_administrator(admin_id)
        .await?;

    let (access_token, refresh_token) = generate_token_pair(
        admin.id,
        admin.name,
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    Ok(Json(RefreshTokenResponse {
        access_token,
        refresh_token,
    }))
}
