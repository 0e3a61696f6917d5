use crate::utils::error::{Result, SqlGenError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML configuration supplying defaults for the CLI flags.
/// Every key is optional; explicit flags always win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub job: Option<JobSection>,
    pub input: Option<InputSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSection {
    pub schema: Option<String>,
    pub table: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSection {
    pub definition_file: Option<String>,
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub output_file: Option<String>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|source| SqlGenError::ReadError {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| SqlGenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn schema(&self) -> Option<&str> {
        self.job.as_ref().and_then(|j| j.schema.as_deref())
    }

    pub fn table(&self) -> Option<&str> {
        self.job.as_ref().and_then(|j| j.table.as_deref())
    }

    pub fn definition_file(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.definition_file.as_deref())
    }

    pub fn data_file(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.data_file.as_deref())
    }

    pub fn output_file(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.output_file.as_deref())
    }
}
