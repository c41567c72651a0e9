//! JWT authentication middleware.
//!
//! Validates the bearer token and resolves the administrator identity
//! (id and name) into request extensions, where protected handlers pick
//! it up as the owner of financial operations.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_access_token};

/// Authenticated administrator identity resolved from JWT claims.
///
/// Added to request extensions after successful authentication and
/// extracted in handlers with `Extension<AuthAdmin>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAdmin {
    /// Administrator ID from JWT claims
    pub admin_id: i32,
    /// Administrator name from JWT claims
    pub name: String,
}

impl TryFrom<Claims> for AuthAdmin {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let admin_id = claims.sub.parse().map_err(|_| AppError::Unauthorized {
            message: "Invalid administrator ID in token".to_string(),
        })?;
        Ok(Self {
            admin_id,
            name: claims.name,
        })
    }
}

/// JWT authentication middleware.
///
/// # Headers
/// Expects: `Authorization: Bearer <token>`
///
/// # Errors
/// Returns 401 Unauthorized if the header is missing or malformed, or if
/// the token fails validation or has expired.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized {
            message: "Invalid authorization header format. Expected: Bearer <token>".to_string(),
        })?;

    let claims = validate_access_token(token, &state.jwt_config.secret)?;
    let auth_admin = AuthAdmin::try_from(claims)?;
    request.extensions_mut().insert(auth_admin);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::TokenType;

    #[test]
    fn test_auth_admin_from_claims() {
        let claims = Claims {
            sub: "123".to_string(),
            name: "maria".to_string(),
            token_type: TokenType::Access,
            iat: 0,
            exp: 9999999999,
        };

        let auth_admin = AuthAdmin::try_from(claims).unwrap();
        assert_eq!(auth_admin.admin_id, 123);
        assert_eq!(auth_admin.name, "maria");
    }

    #[test]
    fn test_auth_admin_rejects_non_numeric_subject() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            name: "maria".to_string(),
            token_type: TokenType::Access,
            iat: 0,
            exp: 9999999999,
        };

        assert!(matches!(
            AuthAdmin::try_from(claims),
            Err(AppError::Unauthorized { .. })
        ));
    }
}
