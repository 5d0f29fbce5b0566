use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::validation::ValidationResponse;

/// A saved validation run: the submitted text, where it was sent, when, and
/// what came back. Written as pretty-printed JSON when the user asks for an
/// output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub api_url: String,
    pub submitted_text: String,
    pub created_at: DateTime<Utc>,
    pub response: ValidationResponse,
}

impl ValidationRecord {
    pub fn new(
        api_url: impl Into<String>,
        submitted_text: impl Into<String>,
        response: ValidationResponse,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            submitted_text: submitted_text.into(),
            created_at: Utc::now(),
            response,
        }
    }
}
