use arena_view::utils::{logger, validation::Validate};
use arena_view::{ChannelPipeline, CliConfig, LocalStorage, ViewEngine};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting arena-view");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ChannelPipeline::new(storage, config);
    let engine = ViewEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Channel page rendered successfully");
            println!("✅ Channel page rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Rendering failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
