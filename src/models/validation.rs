use serde::{Deserialize, Serialize};

use crate::models::claim::Claim;

/// The only outbound payload: the text whose claims should be checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub text: String,
}

impl ValidationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Response body of a successful POST to the validation endpoint.
///
/// `claims` is an ordered, possibly empty sequence; the server's order is
/// preserved and rendered 1-indexed. `validated` is true only when at least
/// one claim came back with strong evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResponse {
    #[serde(default)]
    pub validated: bool,

    #[serde(default)]
    pub claims: Vec<Claim>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResponse {
    /// Number of claims whose confidence is exactly "High" or "Medium".
    pub fn strong_evidence_count(&self) -> usize {
        self.claims
            .iter()
            .filter(|claim| claim.has_strong_evidence())
            .count()
    }

    /// The server message, treating an empty string as absent.
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}
