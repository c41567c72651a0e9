use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::{AppError, ConstraintParser};

/// Converts Diesel database errors into structured AppError variants.
///
/// Unique violations become `Duplicate` (409) so concurrent duplicate
/// association inserts or wallet creations surface as conflicts, and
/// foreign key violations become `Validation` (the referenced row does
/// not exist).
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();
        let constraint_name = info.constraint_name();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                if let Some((entity, field, value)) =
                    ConstraintParser::parse_unique_violation(message, constraint_name)
                {
                    AppError::Duplicate {
                        entity,
                        field,
                        value,
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Unique constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                if let Some((entity, field)) =
                    ConstraintParser::parse_not_null_violation(message, constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!("Field is required for {}", entity),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Not null constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                if let Some((entity, field, referenced_value)) =
                    ConstraintParser::parse_foreign_key_violation(message, constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!(
                            "Invalid reference to {} with value '{}'",
                            entity, referenced_value
                        ),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Foreign key constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            DatabaseErrorKind::CheckViolation => {
                if let Some((entity, field)) =
                    ConstraintParser::parse_check_violation(message, constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!("Check constraint failed for {} field", entity),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Check constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {}", message)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn test_convert_not_found_error() {
        let result =
            DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find student");
        assert!(matches!(result, AppError::NotFound { .. }));
    }

    #[test]
    fn test_convert_duplicate_association() {
        let info = MockDatabaseErrorInfo {
            message: "duplicate key value violates unique constraint \"student_teachers_pkey\"\nDETAIL: Key (student_id, teacher_id)=(1, 2) already exists.".to_string(),
            constraint_name: Some("student_teachers_pkey".to_string()),
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));

        let result = DatabaseErrorConverter::convert_diesel_error(error, "associate teacher");
        match result {
            AppError::Duplicate { entity, .. } => assert_eq!(entity, "student_teachers"),
            other => panic!("Expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_foreign_key_violation() {
        let info = MockDatabaseErrorInfo {
            message: "insert or update on table \"payables\" violates foreign key constraint \"payables_administrator_id_fkey\"\nDETAIL: Key (administrator_id)=(99) is not present in table \"administrators\".".to_string(),
            constraint_name: Some("payables_administrator_id_fkey".to_string()),
        };
        let error =
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, Box::new(info));

        let result = DatabaseErrorConverter::convert_diesel_error(error, "insert payable");
        match result {
            AppError::Validation { field, .. } => assert_eq!(field, "administrator_id"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }
}
