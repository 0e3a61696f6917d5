use crate::domain::model::{ColumnDefinition, TableDefinition};
use crate::utils::error::{Result, SqlGenError};

/// Parses a table definition file into an ordered `TableDefinition`.
///
/// The first line is the DDL header and the second a divider row; both are
/// dropped. Each remaining line is whitespace-tokenized, `NOT`/`NULL`
/// qualifier tokens are stripped, and the first two surviving tokens become
/// the column name and its declared type.
pub fn parse_definition(content: &str) -> Result<TableDefinition> {
    let mut columns = Vec::new();

    for (index, line) in content.lines().enumerate().skip(2) {
        let tokens: Vec<&str> = line
            .split_whitespace()
            .filter(|t| *t != "NOT" && *t != "NULL")
            .collect();

        if tokens.len() < 2 {
            return Err(SqlGenError::MalformedDefinitionError {
                line_number: index + 1,
                line: line.to_string(),
            });
        }

        columns.push(ColumnDefinition {
            name: tokens[0].to_string(),
            declared_type: tokens[1].to_string(),
        });
    }

    if columns.is_empty() {
        return Err(SqlGenError::EmptyDefinitionError);
    }

    Ok(TableDefinition::new(columns))
}
