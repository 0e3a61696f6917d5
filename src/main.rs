use clap::Parser;
use insertgen::utils::logger;
use insertgen::{CliConfig, EtlEngine, InsertPipeline, LocalStorage};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting insertgen CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor_enabled = cli.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 合併並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 創建存儲和管道
    let storage = LocalStorage::new();
    let pipeline = InsertPipeline::new(storage, config);

    // 創建引擎並運行
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ SQL generation completed successfully!");
            println!("✅ SQL generation completed successfully!");
            println!("📁 Output saved to: {}", output_path);
            println!(
                "💡 To add COMMIT; every 10,000 records: sed '0~10000 s/$/\\nCOMMIT;/g' < {} > insert_records_final.sql",
                output_path
            );
        }
        Err(e) => {
            tracing::error!("❌ SQL generation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("⚠️  The output file may exist with partial contents; do not load it.");
            std::process::exit(1);
        }
    }

    Ok(())
}
