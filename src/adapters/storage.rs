use crate::domain::ports::Storage;
use crate::utils::error::{Result, SqlGenError};
use std::fs;
use std::path::Path;

/// Filesystem-backed storage. Errors carry the offending path.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| SqlGenError::ReadError {
            path: path.to_string(),
            source,
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SqlGenError::WriteError {
                    path: path.to_string(),
                    source,
                })?;
            }
        }

        fs::write(full_path, data).map_err(|source| SqlGenError::WriteError {
            path: path.to_string(),
            source,
        })
    }
}
