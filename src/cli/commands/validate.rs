use anyhow::{anyhow, Result};
use log::info;
use std::fs;
use std::path::Path;

use claimlens::implementations::config::ClientConfig;
use claimlens::models::report::ValidationRecord;
use claimlens::session::{Screen, StatusKind, ValidationSession};
use claimlens::traits::backend::ValidationBackend;

use crate::cli::ui;

/// Claim validation command
pub async fn execute<B: ValidationBackend>(
    backend: B,
    config: &ClientConfig,
    text: Option<&str>,
    file: Option<&Path>,
    api_url_flag: Option<&str>,
    output: Option<&Path>,
    output_format: &str,
) -> Result<()> {
    ui::print_header("Validating Claims");

    let api_url = config.resolve_api_url(api_url_flag);
    ui::print_info(&format!("Using API URL: {}", api_url));

    let text = resolve_input_text(text, file)?;
    info!("Submitting {} characters of input", text.len());

    let session = ValidationSession::new(backend);

    let spinner = ui::spinner_with_message("Validating claims...");
    session.submit(&api_url, &text).await;
    let screen = session.screen().await;

    if screen.status.kind == StatusKind::Error {
        spinner.finish_with_message("Validation failed!");
        ui::print_status(&screen.status);
        return Err(anyhow!("validation did not complete"));
    }

    spinner.finish_with_message("Validation completed!");
    ui::print_status(&screen.status);

    if output_format.eq_ignore_ascii_case("json") {
        let response = screen
            .last_response
            .as_ref()
            .ok_or_else(|| anyhow!("no response to print"))?;
        println!("{}", serde_json::to_string_pretty(response)?);
    } else if let Some(results) = &screen.results {
        ui::print_results(results);
    }

    if let Some(path) = output {
        save_report(path, &api_url, &text, &screen)?;
    }

    Ok(())
}

fn resolve_input_text(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        ui::print_info(&format!("Reading input from {}", path.display()));
        return fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read input file {}: {}", path.display(), e));
    }

    ui::read_text_lines().map_err(|e| anyhow!("Failed to read input: {}", e))
}

fn save_report(path: &Path, api_url: &str, text: &str, screen: &Screen) -> Result<()> {
    let response = screen
        .last_response
        .clone()
        .ok_or_else(|| anyhow!("no response to save"))?;

    if path.exists() {
        let overwrite = ui::confirm_action(&format!("{} exists. Overwrite?", path.display()))?;
        if !overwrite {
            ui::print_warning("Report not saved.");
            return Ok(());
        }
    }

    let record = ValidationRecord::new(api_url, text, response);
    fs::write(path, serde_json::to_string_pretty(&record)?)
        .map_err(|e| anyhow!("Failed to write report to {}: {}", path.display(), e))?;

    ui::print_success(&format!("Report saved to {}", path.display()));
    Ok(())
}
