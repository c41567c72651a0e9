//! Authentication DTOs: login, registration and token refresh.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::AdministratorResponse;

/// Request body for logging in with name and password.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub administrator: AdministratorResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Request body for registering a new administrator account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 6, max = 72, message = "Password must be between 6 and 72 characters"))]
    pub password: String,
}

/// Response body for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub administrator: AdministratorResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Request body for refreshing an access token.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Response body carrying the new token pair.
#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}
