use std::sync::OnceLock;

use regex::Regex;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Postgres names constraints after table and column (`students_cpf_key`,
/// `payables_administrator_id_fkey`), and its DETAIL lines carry the
/// offending values. This parser turns both into structured
/// (entity, field, value) information for the error taxonomy.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" in PostgreSQL DETAIL lines
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation into (entity, field, value).
    ///
    /// Composite-key constraint names (association tables) resolve to the
    /// table name with the full key tuple as the value, so a duplicate
    /// `student_teachers_pkey` reads as a duplicate association.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let (field, value) = Self::extract_key_value(message)
            .unwrap_or_else(|| ("key".to_string(), "duplicate_value".to_string()));

        if let Some(constraint) = constraint_name {
            if let Some((entity, constraint_field)) = Self::split_constraint_name(constraint) {
                let field = if constraint_field.is_empty() {
                    field
                } else {
                    constraint_field
                };
                return Some((entity, field, value));
            }
        }

        Self::extract_table(message).map(|entity| (entity, field, value))
    }

    /// Parses a not-null violation into (entity, field).
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        let field = Self::extract_column(message)?;
        let entity = Self::extract_table(message)
            .or_else(|| {
                constraint_name.and_then(|c| Self::split_constraint_name(c).map(|(e, _)| e))
            })
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Parses a foreign key violation into (entity, field, referenced value).
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let (field, value) = Self::extract_key_value(message)?;
        let entity = constraint_name
            .and_then(|c| Self::split_constraint_name(c).map(|(e, _)| e))
            .or_else(|| Self::extract_table(message))
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Parses a check violation into (entity, field).
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        let constraint = constraint_name?;
        let (entity, field) = Self::split_constraint_name(constraint)?;
        let field = if field.is_empty() {
            Self::extract_column(message).unwrap_or_else(|| "value".to_string())
        } else {
            field
        };
        Some((entity, field))
    }

    /// Splits a Postgres constraint name like `students_cpf_key` or
    /// `payables_administrator_id_fkey` into (table, column).
    ///
    /// Table names in this schema may themselves contain underscores
    /// (`tuition_statuses`, `student_teachers`), so the table part is
    /// matched against the known tables first, longest name wins.
    fn split_constraint_name(constraint: &str) -> Option<(String, String)> {
        const SUFFIXES: [&str; 4] = ["_pkey", "_key", "_fkey", "_check"];
        const TABLES: [&str; 12] = [
            "tuition_statuses",
            "student_teachers",
            "lesson_students",
            "administrators",
            "receivables",
            "languages",
            "students",
            "teachers",
            "payables",
            "lessons",
            "wallets",
            "todos",
        ];

        let body = SUFFIXES
            .iter()
            .find_map(|s| constraint.strip_suffix(s))
            .unwrap_or(constraint);

        for table in TABLES {
            if body == table {
                return Some((table.to_string(), String::new()));
            }
            if let Some(rest) = body.strip_prefix(table) {
                if let Some(column) = rest.strip_prefix('_') {
                    return Some((table.to_string(), column.to_string()));
                }
            }
        }

        // Unknown table: fall back to a best-effort split on the last segment
        body.rsplit_once('_')
            .map(|(table, column)| (table.to_string(), column.to_string()))
    }

    fn extract_key_value(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).map(|caps| {
            (
                caps.get(1).map_or(String::new(), |m| m.as_str().to_string()),
                caps.get(2).map_or(String::new(), |m| m.as_str().to_string()),
            )
        })
    }

    fn extract_column(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn extract_table(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_simple_column() {
        let message = "duplicate key value violates unique constraint \"students_cpf_key\"\nDETAIL: Key (cpf)=(11144477735) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("students_cpf_key"));
        assert_eq!(
            result,
            Some((
                "students".to_string(),
                "cpf".to_string(),
                "11144477735".to_string()
            ))
        );
    }

    #[test]
    fn test_unique_violation_association_pkey() {
        let message = "duplicate key value violates unique constraint \"student_teachers_pkey\"\nDETAIL: Key (student_id, teacher_id)=(1, 2) already exists.";
        let result =
            ConstraintParser::parse_unique_violation(message, Some("student_teachers_pkey"));
        assert_eq!(
            result,
            Some((
                "student_teachers".to_string(),
                "student_id, teacher_id".to_string(),
                "1, 2".to_string()
            ))
        );
    }

    #[test]
    fn test_unique_violation_wallet_owner() {
        let message = "duplicate key value violates unique constraint \"wallets_administrator_id_key\"\nDETAIL: Key (administrator_id)=(7) already exists.";
        let result = ConstraintParser::parse_unique_violation(
            message,
            Some("wallets_administrator_id_key"),
        );
        assert_eq!(
            result,
            Some((
                "wallets".to_string(),
                "administrator_id".to_string(),
                "7".to_string()
            ))
        );
    }

    #[test]
    fn test_foreign_key_violation() {
        let message = "insert or update on table \"payables\" violates foreign key constraint \"payables_administrator_id_fkey\"\nDETAIL: Key (administrator_id)=(999) is not present in table \"administrators\".";
        let result = ConstraintParser::parse_foreign_key_violation(
            message,
            Some("payables_administrator_id_fkey"),
        );
        assert_eq!(
            result,
            Some((
                "payables".to_string(),
                "administrator_id".to_string(),
                "999".to_string()
            ))
        );
    }

    #[test]
    fn test_not_null_violation() {
        let message = "null value in column \"phone\" of relation \"students\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message, None);
        assert_eq!(
            result,
            Some(("resource".to_string(), "phone".to_string()))
        );
    }

    #[test]
    fn test_underscore_table_names_resolve() {
        let message = "duplicate key value violates unique constraint \"tuition_statuses_pkey\"\nDETAIL: Key (id)=(3) already exists.";
        let result =
            ConstraintParser::parse_unique_violation(message, Some("tuition_statuses_pkey"));
        assert_eq!(
            result,
            Some((
                "tuition_statuses".to_string(),
                "id".to_string(),
                "3".to_string()
            ))
        );
    }
}
