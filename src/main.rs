use anyhow::Context;
use clap::Parser;
use replay_notables::utils::{logger, validation::Validate};
use replay_notables::{server, CliConfig, JsonMatchDecoder, SummaryPipeline};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.serve {
        logger::init_server_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting replay-notables");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if config.serve {
        server::serve(&config.bind)
            .await
            .with_context(|| format!("failed serving on {}", config.bind))?;
        return Ok(());
    }

    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = match &config.replay_path {
        Some(path) => pipeline.run(Path::new(path)).await,
        None => {
            tracing::warn!("no record path given");
            serde_json::json!({})
        }
    };

    // Always exactly one JSON object on stdout; `{}` covers every
    // failure mode.
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}
