pub mod etl;

pub use crate::domain::model::{
    ColumnDefinition, ExtractResult, Record, SqlBatch, TableDefinition,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
