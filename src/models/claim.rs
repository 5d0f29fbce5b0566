use serde::{Deserialize, Deserializer, Serialize};

/// A single claim extracted and scored by the backend.
///
/// The backend always sends `claim` and `confidence`; the remaining fields
/// are optional and absent when no usable evidence was found. A
/// `similarity_score` that is not a JSON number (null, a string such as
/// "n/a", or missing entirely) deserializes to `None` and renders as 0.000.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim: String,

    #[serde(default)]
    pub confidence: String,

    #[serde(default, deserialize_with = "lenient_score")]
    pub similarity_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_match_snippet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_match_url: Option<String>,
}

impl Claim {
    /// Whether this claim counts toward the "strong evidence" summary total.
    ///
    /// Matches the literal labels "High" and "Medium" only. Unexpected
    /// casings such as "high" are excluded here even though the pill still
    /// buckets them case-insensitively.
    pub fn has_strong_evidence(&self) -> bool {
        self.confidence == "High" || self.confidence == "Medium"
    }

    /// Styling bucket for this claim's confidence pill.
    pub fn confidence_bucket(&self) -> ConfidenceBucket {
        ConfidenceBucket::from_label(&self.confidence)
    }

    /// Label shown inside the confidence pill.
    pub fn confidence_label(&self) -> &str {
        if self.confidence.is_empty() {
            "Unknown"
        } else {
            &self.confidence
        }
    }
}

/// Styling buckets for confidence pills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBucket {
    High,
    Medium,
    Low,
}

impl ConfidenceBucket {
    /// Bucket a backend confidence label, case-insensitively.
    ///
    /// Anything that is not "high" or "medium" lands in the low/unknown
    /// bucket, including empty labels.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "high" => ConfidenceBucket::High,
            "medium" => ConfidenceBucket::Medium,
            _ => ConfidenceBucket::Low,
        }
    }
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|score| score.is_finite()))
}
