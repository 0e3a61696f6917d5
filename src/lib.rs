pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::pipelines::insert_pipeline::InsertPipeline;
pub use config::ResolvedConfig;
pub use core::etl::EtlEngine;
pub use utils::error::{Result, SqlGenError};
