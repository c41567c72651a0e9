//! Error handler converting AppError into HTTP responses.
//!
//! Implements `IntoResponse` for `AppError` so every handler can return
//! `AppResult<T>` and get consistent JSON error bodies with the status
//! mapping of the error taxonomy.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Duplicate → 409 CONFLICT
    /// - Conflict → 409 CONFLICT
    /// - Validation → 400 BAD_REQUEST
    /// - BadRequest → 400 BAD_REQUEST
    /// - Unauthorized → 401 UNAUTHORIZED
    /// - Forbidden → 403 FORBIDDEN
    /// - Database → 500 INTERNAL_SERVER_ERROR
    /// - ConnectionPool → 503 SERVICE_UNAVAILABLE
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        if let AppError::Database { operation, source } = &self {
            tracing::error!(operation = %operation, error = %source, "Database error");
        }
        if let AppError::Internal { source } = &self {
            tracing::error!(error = %source, "Internal error");
        }

        let (status, error_response) = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", &self.to_string())
                    .with_details(&format!("{} with {}={} does not exist", entity, field, value)),
            ),
            AppError::Duplicate { .. } => (
                StatusCode::CONFLICT,
                ErrorResponse::new("DUPLICATE_ENTRY", &self.to_string()),
            ),
            AppError::Conflict { message } => (
                StatusCode::CONFLICT,
                ErrorResponse::new("CONFLICT", message),
            ),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_ERROR", reason).with_details(field),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message),
            ),
            AppError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHORIZED", message),
            ),
            AppError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("FORBIDDEN", message),
            ),
            AppError::Database { operation, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    "DATABASE_ERROR",
                    &format!("Database operation failed: {}", operation),
                ),
            ),
            AppError::ConnectionPool { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable"),
            ),
            AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
            ),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Conflict { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Duplicate { .. } => "DUPLICATE_ENTRY",
        AppError::Conflict { .. } => "CONFLICT",
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Unauthorized { .. } => "UNAUTHORIZED",
        AppError::Forbidden { .. } => "FORBIDDEN",
        AppError::Database { .. } => "DATABASE_ERROR",
        AppError::ConnectionPool { .. } => "SERVICE_UNAVAILABLE",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status_code() {
        let error = AppError::not_found("student", 123);
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
        assert_eq!(error_to_code(&error), "NOT_FOUND");
    }

    #[test]
    fn test_duplicate_status_code() {
        let error = AppError::Duplicate {
            entity: "students".to_string(),
            field: "cpf".to_string(),
            value: "11144477735".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::CONFLICT);
        assert_eq!(error_to_code(&error), "DUPLICATE_ENTRY");
    }

    #[test]
    fn test_conflict_status_code() {
        let error = AppError::Conflict {
            message: "Teacher is not associated with student".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::CONFLICT);
        assert_eq!(error_to_code(&error), "CONFLICT");
    }

    #[test]
    fn test_validation_status_code() {
        let error = AppError::validation("cpf", "Invalid CPF");
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
        assert_eq!(error_to_code(&error), "VALIDATION_ERROR");
    }

    #[test]
    fn test_forbidden_status_code() {
        let error = AppError::Forbidden {
            message: "Access denied".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::FORBIDDEN);
        assert_eq!(error_to_code(&error), "FORBIDDEN");
    }

    #[test]
    fn test_unauthorized_status_code() {
        let error = AppError::Unauthorized {
            message: "Authentication required".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::UNAUTHORIZED);
        assert_eq!(error_to_code(&error), "UNAUTHORIZED");
    }

    #[test]
    fn test_database_status_code() {
        let error = AppError::Database {
            operation: "insert payable".to_string(),
            source: anyhow::anyhow!("Connection failed"),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error_to_code(&error), "DATABASE_ERROR");
    }

    #[test]
    fn test_connection_pool_status_code() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("Pool exhausted"),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error_to_code(&error), "SERVICE_UNAVAILABLE");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("wallet", 9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Conflict {
            message: "Administrator already has a wallet".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
