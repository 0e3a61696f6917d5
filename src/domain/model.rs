use serde::{Deserialize, Serialize};

/// One column from the table definition file. `declared_type` keeps the raw
/// type token (e.g. `VARCHAR2(30)`); formatting matches on it by substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub declared_type: String,
}

/// Ordered column definitions plus the precomputed comma-joined column list
/// reused by every generated statement.
#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub columns: Vec<ColumnDefinition>,
    pub column_list: String,
}

impl TableDefinition {
    pub fn new(columns: Vec<ColumnDefinition>) -> Self {
        let column_list = columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            columns,
            column_list,
        }
    }
}

/// One row's worth of raw field values, positionally aligned with the columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub table: TableDefinition,
    pub records: Vec<Record>,
}

/// Output of the transform phase. Each statement is self-contained and carries
/// its own trailing newline.
#[derive(Debug, Clone)]
pub struct SqlBatch {
    pub statements: Vec<String>,
}
