use crate::config::file::FileConfig;
use crate::config::{ResolvedConfig, DEFAULT_OUTPUT_FILE};
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "insertgen")]
#[command(about = "Generates SQL insert statements from a comma-separated data file")]
pub struct CliConfig {
    /// Schema name (tst1, tst2 or tst3)
    #[arg(long)]
    pub schema: Option<String>,

    /// Table name
    #[arg(long)]
    pub table: Option<String>,

    /// File containing the table definition; copy/paste DDL into a text file
    #[arg(long)]
    pub definition_file: Option<String>,

    /// File containing the data to be inserted; comma-separated, one record per line
    #[arg(long)]
    pub data_file: Option<String>,

    /// Output file for the generated insert statements
    #[arg(long)]
    pub output_file: Option<String>,

    /// Optional TOML config file supplying defaults for the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl CliConfig {
    /// Merges flags with the optional config file (flags win) and validates
    /// the result.
    pub fn resolve(self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        let resolved = ResolvedConfig {
            schema: pick("schema", self.schema, file.schema())?,
            table: pick("table", self.table, file.table())?,
            definition_file: pick("definition_file", self.definition_file, file.definition_file())?,
            data_file: pick("data_file", self.data_file, file.data_file())?,
            output_file: self
                .output_file
                .or_else(|| file.output_file().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
        };

        resolved.validate()?;
        Ok(resolved)
    }
}

fn pick(field: &str, flag: Option<String>, file: Option<&str>) -> Result<String> {
    let merged = flag.or_else(|| file.map(str::to_string));
    Ok(validate_required_field(field, &merged)?.clone())
}
