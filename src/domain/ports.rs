use crate::domain::model::{ExtractResult, SqlBatch};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn schema(&self) -> &str;
    fn table(&self) -> &str;
    fn definition_file(&self) -> &str;
    fn data_file(&self) -> &str;
    fn output_file(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<ExtractResult>;
    fn transform(&self, input: ExtractResult) -> Result<SqlBatch>;
    fn load(&self, batch: SqlBatch) -> Result<String>;
}
