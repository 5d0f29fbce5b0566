use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "claimlens",
    about = "A client for validating factual claims against a research validator API",
    version,
    author,
    long_about = None
)]
pub struct ClaimlensCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the claims in a piece of text
    Validate {
        /// Text to validate; prompts interactively when neither this nor
        /// --file is given
        text: Option<String>,

        /// Read the text to validate from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Validation endpoint URL (overrides config and environment)
        #[arg(short, long)]
        api_url: Option<String>,

        /// Write the full validation report to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check backend availability and configured API keys
    Health {
        /// Validation endpoint URL (overrides config and environment)
        #[arg(short, long)]
        api_url: Option<String>,
    },
}
