use clap::Parser;
use punchpro::domain::ports::ConfigProvider;
use punchpro::utils::{logger, validation::Validate};
use punchpro::{CliConfig, EtlEngine, LocalStorage, PunchPipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting punchpro");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = PunchPipeline::new(config.clone());
    let engine = EtlEngine::new(pipeline, storage);

    let summary = engine.run(config.input_files(), config.output_path());

    for (file, written) in &summary.succeeded {
        println!("✅ {} -> {}", file, written);
    }
    for (file, error) in &summary.failed {
        eprintln!("❌ Error processing {}: {}", file, error);
    }

    if !summary.all_succeeded() {
        std::process::exit(1);
    }

    println!(
        "✅ Cleaned {} file(s) into {}",
        summary.succeeded.len(),
        config.output_path()
    );
    Ok(())
}
