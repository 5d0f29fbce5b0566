use anyhow::Result;
use clap::Parser;
use log::info;

use claimlens::implementations::config::ClientConfig;
use claimlens::implementations::http_backend::HttpValidationBackend;

mod cli;
use cli::{ClaimlensCli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = ClaimlensCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Pick up CLAIMLENS_API_URL and friends from a local .env if present
    if dotenv::dotenv().is_ok() {
        info!("Loaded environment variables from .env file");
    }

    let config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };

    let backend = HttpValidationBackend::new(&config)?;

    if !cli.output_format.eq_ignore_ascii_case("json") {
        println!("Claimlens - Research Claim Validation Client");
    }

    // Handle commands
    match &cli.command {
        Commands::Validate {
            text,
            file,
            api_url,
            output,
        } => {
            cli::commands::validate::execute(
                backend,
                &config,
                text.as_deref(),
                file.as_deref(),
                api_url.as_deref(),
                output.as_deref(),
                &cli.output_format,
            )
            .await?;
        }

        Commands::Health { api_url } => {
            cli::commands::health::execute(&backend, &config, api_url.as_deref(), &cli.output_format)
                .await?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
