use crate::error::DatabaseErrorConverter;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// The variants form the error taxonomy the HTTP layer maps to status codes:
/// missing references are `NotFound`, duplicate unique keys and duplicate
/// associations are `Duplicate`, malformed input is `Validation`, and
/// touching another administrator's financial records is `Forbidden`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Duplicate entry error for unique constraint violations
    #[error("Duplicate entry: {entity}.{field} = '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Conflict with the current state of a resource, e.g. a pair that is
    /// already associated or not associated at all
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Unauthorized access error with authentication message
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Forbidden access error with authorization message
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Shorthand for a `NotFound` error keyed by id.
    pub fn not_found(entity: &str, id: i32) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        }
    }

    /// Shorthand for a `Validation` error.
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl<E> From<bb8::RunError<E>> for AppError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: bb8::RunError<E>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::new(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let reason = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect::<Vec<_>>()
            .join("; ");
        AppError::BadRequest { message: reason }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_shorthand() {
        let err = AppError::not_found("student", 42);
        match err {
            AppError::NotFound {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "student");
                assert_eq!(field, "id");
                assert_eq!(value, "42");
            }
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_display_duplicate() {
        let err = AppError::Duplicate {
            entity: "students".to_string(),
            field: "cpf".to_string(),
            value: "11144477735".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate entry: students.cpf = '11144477735' already exists"
        );
    }

    #[test]
    fn test_diesel_not_found_converts() {
        let err = AppError::from(diesel::result::Error::NotFound);
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
