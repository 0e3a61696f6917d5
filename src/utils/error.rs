use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlGenError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed definition line {line_number}: {line:?} (expected a column name and a data type)")]
    MalformedDefinitionError { line_number: usize, line: String },

    #[error("Definition file contains no column definitions")]
    EmptyDefinitionError,

    #[error("Record {record_index}: expected {expected} fields, got {actual}")]
    FieldCountError {
        record_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported data type {declared_type:?} for column {column}")]
    UnsupportedTypeError {
        column: String,
        declared_type: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, SqlGenError>;
