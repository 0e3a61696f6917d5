use crate::domain::model::ColumnDefinition;
use crate::utils::error::{Result, SqlGenError};
use chrono::NaiveDate;

/// Renders one raw field value as a SQL literal, based on a case-sensitive
/// substring match against the column's declared type.
///
/// Match order is fixed: CHAR, then NUMBER, then DATE. Values are emitted
/// exactly as read; a value that would produce questionable SQL (an embedded
/// quote in a CHAR, a DATE that is not YYYY-MM-DD) is logged as a warning but
/// never altered.
pub fn format_value(value: &str, column: &ColumnDefinition) -> Result<String> {
    let declared_type = column.declared_type.as_str();

    if declared_type.contains("CHAR") {
        if value.contains('\'') {
            tracing::warn!(
                "Column {}: value {:?} contains a quote character; it will not be escaped",
                column.name,
                value
            );
        }
        return Ok(format!("'{}'", value));
    }

    if declared_type.contains("NUMBER") {
        return Ok(value.to_string());
    }

    if declared_type.contains("DATE") {
        if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            tracing::warn!(
                "Column {}: value {:?} does not look like YYYY-MM-DD",
                column.name,
                value
            );
        }
        return Ok(format!("TO_DATE('{}','YYYY-MM-DD')", value));
    }

    Err(SqlGenError::UnsupportedTypeError {
        column: column.name.clone(),
        declared_type: declared_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, declared_type: &str) -> ColumnDefinition {
        ColumnDefinition {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
        }
    }

    #[test]
    fn test_char_values_are_quoted() {
        let formatted = format_value("Alice", &column("NAME", "VARCHAR2(10)")).unwrap();
        assert_eq!(formatted, "'Alice'");
        assert!(formatted.starts_with('\'') && formatted.ends_with('\''));
    }

    #[test]
    fn test_number_values_pass_through() {
        assert_eq!(format_value("42", &column("ID", "NUMBER")).unwrap(), "42");
        assert_eq!(
            format_value("not-a-number", &column("ID", "NUMBER")).unwrap(),
            "not-a-number"
        );
    }

    #[test]
    fn test_date_values_get_to_date() {
        assert_eq!(
            format_value("2024-01-15", &column("CREATED", "DATE")).unwrap(),
            "TO_DATE('2024-01-15','YYYY-MM-DD')"
        );
    }

    #[test]
    fn test_match_order_is_char_then_number_then_date() {
        // CHAR wins over NUMBER when a type token matches both
        assert_eq!(
            format_value("x", &column("C", "NUMBERCHAR")).unwrap(),
            "'x'"
        );
        // NUMBER wins over DATE
        assert_eq!(format_value("5", &column("C", "NUMBERDATE")).unwrap(), "5");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(matches!(
            format_value("x", &column("C", "varchar")),
            Err(SqlGenError::UnsupportedTypeError { .. })
        ));
    }

    #[test]
    fn test_unsupported_type_names_the_token() {
        let err = format_value("x", &column("PAYLOAD", "BLOB")).unwrap_err();
        match err {
            SqlGenError::UnsupportedTypeError {
                column,
                declared_type,
            } => {
                assert_eq!(column, "PAYLOAD");
                assert_eq!(declared_type, "BLOB");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_embedded_quote_is_emitted_unescaped() {
        // warned about, but never sanitized
        assert_eq!(
            format_value("O'Brien", &column("NAME", "CHAR(10)")).unwrap(),
            "'O'Brien'"
        );
    }
}
