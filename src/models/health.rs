use serde::{Deserialize, Serialize};

/// Payload of the API root endpoint (GET `/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub docs: String,
}

/// Payload of the health endpoint (GET `/health`).
///
/// The key fields report "set" or "missing" rather than the key values
/// themselves; `similarity_method` names the scoring strategy the backend
/// will use for the next validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub gemini_api_key: String,

    #[serde(default)]
    pub openai_api_key: String,

    #[serde(default)]
    pub you_api_key: String,

    #[serde(default)]
    pub similarity_method: String,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
