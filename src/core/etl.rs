use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting SQL generation...");

        // Extract
        println!("Reading input files...");
        let started = Instant::now();
        let input = self.pipeline.extract()?;
        tracing::info!(
            "extract ran in: {:.4} seconds",
            started.elapsed().as_secs_f64()
        );
        println!(
            "Read {} columns, {} records",
            input.table.columns.len(),
            input.records.len()
        );
        self.monitor.log_stats("Extract");

        // Transform
        println!("Generating SQL strings...");
        let started = Instant::now();
        let batch = self.pipeline.transform(input)?;
        tracing::info!(
            "transform ran in: {:.4} seconds",
            started.elapsed().as_secs_f64()
        );
        println!("Generated {} statements", batch.statements.len());
        self.monitor.log_stats("Transform");

        // Load
        println!("Writing statements...");
        let started = Instant::now();
        let output_path = self.pipeline.load(batch)?;
        tracing::info!("load ran in: {:.4} seconds", started.elapsed().as_secs_f64());
        println!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
