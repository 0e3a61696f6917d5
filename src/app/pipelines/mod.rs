pub mod insert_pipeline;
