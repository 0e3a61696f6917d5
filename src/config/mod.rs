#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};

/// Schemas the tool is allowed to target.
pub const SCHEMAS: [&str; 3] = ["tst1", "tst2", "tst3"];

pub const DEFAULT_OUTPUT_FILE: &str = "insert_records.sql";

/// Fully merged run configuration (CLI flags > config file > defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub schema: String,
    pub table: String,
    pub definition_file: String,
    pub data_file: String,
    pub output_file: String,
}

impl ConfigProvider for ResolvedConfig {
    fn schema(&self) -> &str {
        &self.schema
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn definition_file(&self) -> &str {
        &self.definition_file
    }

    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("schema", &self.schema, &SCHEMAS)?;
        validate_non_empty_string("table", &self.table)?;
        validate_path("definition_file", &self.definition_file)?;
        validate_path("data_file", &self.data_file)?;
        validate_path("output_file", &self.output_file)?;
        Ok(())
    }
}
