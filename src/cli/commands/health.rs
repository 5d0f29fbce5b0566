use anyhow::{anyhow, Result};

use claimlens::implementations::config::{api_base_url, ClientConfig};
use claimlens::traits::backend::ValidationBackend;

use crate::cli::ui;

/// Backend health check command
pub async fn execute<B: ValidationBackend>(
    backend: &B,
    config: &ClientConfig,
    api_url_flag: Option<&str>,
    output_format: &str,
) -> Result<()> {
    ui::print_header("Backend Health");

    let api_url = config.resolve_api_url(api_url_flag);
    let base_url = api_base_url(&api_url);
    ui::print_info(&format!("Probing {}", base_url));

    let spinner = ui::spinner_with_message("Contacting backend...");
    let info = backend.fetch_info(&base_url).await;
    let health = backend.fetch_health(&base_url).await;
    spinner.finish_and_clear();

    // The root endpoint is informational; a failure there is not fatal as
    // long as /health answers.
    match &info {
        Ok(info) => {
            ui::print_result("API", &format!("{} v{} ({})", info.name, info.version, info.status));
        }
        Err(e) => {
            ui::print_warning(&format!("Could not fetch API info: {}", e));
        }
    }

    let health = health.map_err(|e| anyhow!("Health check failed: {}", e))?;

    if output_format.eq_ignore_ascii_case("json") {
        println!("{}", serde_json::to_string_pretty(&health)?);
        return Ok(());
    }

    if health.is_healthy() {
        ui::print_success("Backend is healthy.");
    } else {
        ui::print_warning(&format!("Backend status: {}", health.status));
    }

    ui::print_result("Search key (YOU_API_KEY)", &health.you_api_key);
    ui::print_result("Gemini key", &health.gemini_api_key);
    ui::print_result("OpenAI key", &health.openai_api_key);
    ui::print_result("Similarity method", &health.similarity_method);

    Ok(())
}
