use crate::domain::model::{Record, TableDefinition};
use crate::domain::services::formatter::format_value;
use crate::utils::error::{Result, SqlGenError};

/// Assembles one INSERT statement for one record.
///
/// The record's field count must match the column count exactly; a mismatch
/// would silently misalign values with columns, so it aborts the run instead.
/// The trailing "; \n" matches the generated-file convention: one statement
/// per line, ready for external COMMIT injection.
pub fn build_statement(
    schema: &str,
    table: &str,
    def: &TableDefinition,
    record: &Record,
    record_index: usize,
) -> Result<String> {
    if record.fields.len() != def.columns.len() {
        return Err(SqlGenError::FieldCountError {
            record_index,
            expected: def.columns.len(),
            actual: record.fields.len(),
        });
    }

    let mut values = Vec::with_capacity(record.fields.len());
    for (field, column) in record.fields.iter().zip(def.columns.iter()) {
        values.push(format_value(field, column)?);
    }

    Ok(format!(
        "insert into {}.{} ({}) values ({}); \n",
        schema,
        table,
        def.column_list,
        values.join(", ")
    ))
}
