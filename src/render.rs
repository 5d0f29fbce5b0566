//! Pure rendering of a validation response into a summary line and an
//! ordered list of claim cards. No terminal concerns live here; the CLI
//! paints the returned structures.

use crate::models::claim::ConfidenceBucket;
use crate::models::validation::ValidationResponse;

/// Shown when the response carries no claims and no message.
pub const NO_CLAIMS_MESSAGE: &str = "No claims returned. Try a different input.";

/// Shown in place of the evidence snippet when the backend found none.
pub const NO_SNIPPET_PLACEHOLDER: &str = "Evidence: (no strong snippet found)";

/// Confidence pill: the backend's label plus its styling bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfidencePill {
    pub label: String,
    pub bucket: ConfidenceBucket,
}

/// One rendered claim card.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimCard {
    /// 1-based position, matching the server's claim order.
    pub index: usize,
    /// "{index}. {claim text}"
    pub headline: String,
    pub pill: ConfidencePill,
    /// "Similarity: {score to 3 decimal places}"
    pub similarity: String,
    /// "Evidence: {snippet}" or the no-snippet placeholder.
    pub evidence: String,
    /// Present only when the backend returned a source URL.
    pub source_url: Option<String>,
}

/// The full rendered result set: one summary line plus the card list.
///
/// Rendering the same response twice yields an equal value; the card list
/// replaces any previous one rather than appending.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResults {
    pub summary: String,
    pub cards: Vec<ClaimCard>,
}

/// Transform a validation response into its rendered form.
pub fn render_results(response: &ValidationResponse) -> RenderedResults {
    if response.claims.is_empty() {
        let summary = response
            .message_text()
            .unwrap_or(NO_CLAIMS_MESSAGE)
            .to_string();
        return RenderedResults {
            summary,
            cards: Vec::new(),
        };
    }

    let strong_count = response.strong_evidence_count();

    let summary_parts = [
        format!(
            "Overall validated: {}",
            if response.validated {
                "true ✅"
            } else {
                "false ⚠️"
            }
        ),
        format!("Claims found: {}", response.claims.len()),
        format!("Strong evidence (High/Medium): {}", strong_count),
    ];

    let summary = match response.message_text() {
        Some(message) => format!("{} • {}", message, summary_parts.join(" • ")),
        None => summary_parts.join(" • "),
    };

    let cards = response
        .claims
        .iter()
        .enumerate()
        .map(|(i, claim)| {
            let index = i + 1;
            ClaimCard {
                index,
                headline: format!("{}. {}", index, claim.claim),
                pill: ConfidencePill {
                    label: claim.confidence_label().to_string(),
                    bucket: claim.confidence_bucket(),
                },
                similarity: format!("Similarity: {}", format_similarity(claim.similarity_score)),
                evidence: match &claim.best_match_snippet {
                    Some(snippet) => format!("Evidence: {}", snippet),
                    None => NO_SNIPPET_PLACEHOLDER.to_string(),
                },
                source_url: claim.best_match_url.clone(),
            }
        })
        .collect();

    RenderedResults { summary, cards }
}

/// Format a similarity score to exactly 3 decimal places, "0.000" when the
/// backend sent something non-numeric.
pub fn format_similarity(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:.3}", score),
        None => "0.000".to_string(),
    }
}
