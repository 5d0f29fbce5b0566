use std::env;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Endpoint used when neither flag, environment, nor config file names one.
/// The reference backend binds 127.0.0.1:8000 and serves POST /validate.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/validate";

/// Environment variable consulted when no --api-url flag is given.
pub const API_URL_ENV_VAR: &str = "CLAIMLENS_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Configuration for the claimlens client
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    /// Validation endpoint URL
    pub api_url: Option<String>,

    /// Request timeout in seconds. Unset means no timeout: a stalled
    /// request stalls until the transport gives up.
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: ClientConfig = serde_yaml::from_str(&contents)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the validation endpoint URL.
    ///
    /// Precedence: command-line flag, then the CLAIMLENS_API_URL environment
    /// variable, then the config file, then the built-in default.
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        if let Some(url) = flag {
            debug!("Using API URL from command line: {}", url);
            return url.to_string();
        }

        if let Ok(url) = env::var(API_URL_ENV_VAR) {
            if !url.trim().is_empty() {
                debug!("Using API URL from {}", API_URL_ENV_VAR);
                return url;
            }
        }

        if let Some(url) = &self.api_url {
            debug!("Using API URL from config file");
            return url.clone();
        }

        debug!("Using default API URL: {}", DEFAULT_API_URL);
        DEFAULT_API_URL.to_string()
    }
}

/// Derive the API base URL from a validation endpoint URL.
///
/// Trims a trailing "/validate" segment so one configured URL drives both
/// the validate POST and the root/health probes.
pub fn api_base_url(api_url: &str) -> String {
    let trimmed = api_url.trim_end_matches('/');
    trimmed
        .strip_suffix("/validate")
        .unwrap_or(trimmed)
        .to_string()
}
