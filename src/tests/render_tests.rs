#[cfg(test)]
mod tests {
    use crate::models::claim::{Claim, ConfidenceBucket};
    use crate::models::validation::ValidationResponse;
    use crate::render::{
        format_similarity, render_results, NO_CLAIMS_MESSAGE, NO_SNIPPET_PLACEHOLDER,
    };

    fn claim(text: &str, confidence: &str, score: Option<f64>) -> Claim {
        Claim {
            claim: text.to_string(),
            confidence: confidence.to_string(),
            similarity_score: score,
            best_match_snippet: None,
            best_match_url: None,
        }
    }

    fn response(validated: bool, claims: Vec<Claim>, message: Option<&str>) -> ValidationResponse {
        ValidationResponse {
            validated,
            claims,
            message: message.map(String::from),
        }
    }

    #[test]
    fn renders_single_high_confidence_claim() {
        let response = response(true, vec![claim("C1", "High", Some(0.9))], None);

        let rendered = render_results(&response);

        assert_eq!(
            rendered.summary,
            "Overall validated: true ✅ • Claims found: 1 • Strong evidence (High/Medium): 1"
        );
        assert_eq!(rendered.cards.len(), 1);

        let card = &rendered.cards[0];
        assert_eq!(card.index, 1);
        assert_eq!(card.headline, "1. C1");
        assert_eq!(card.pill.label, "High");
        assert_eq!(card.pill.bucket, ConfidenceBucket::High);
        assert_eq!(card.similarity, "Similarity: 0.900");
        assert_eq!(card.evidence, NO_SNIPPET_PLACEHOLDER);
        assert!(card.source_url.is_none());
    }

    #[test]
    fn empty_claims_show_server_message_only() {
        let response = response(false, vec![], Some("nothing found"));

        let rendered = render_results(&response);

        assert_eq!(rendered.summary, "nothing found");
        assert!(rendered.cards.is_empty());
    }

    #[test]
    fn empty_claims_without_message_show_default() {
        let rendered = render_results(&response(false, vec![], None));
        assert_eq!(rendered.summary, NO_CLAIMS_MESSAGE);
        assert!(rendered.cards.is_empty());

        // An empty-string message counts as absent
        let rendered = render_results(&response(false, vec![], Some("")));
        assert_eq!(rendered.summary, NO_CLAIMS_MESSAGE);
    }

    #[test]
    fn message_prefixes_the_summary() {
        let response = response(
            false,
            vec![claim("C1", "Low", Some(0.1))],
            Some("Processed 1 claim(s) using text-based matching."),
        );

        let rendered = render_results(&response);

        assert_eq!(
            rendered.summary,
            "Processed 1 claim(s) using text-based matching. • \
             Overall validated: false ⚠️ • Claims found: 1 • Strong evidence (High/Medium): 0"
        );
    }

    #[test]
    fn low_confidence_and_missing_score_render_as_low_and_zero() {
        let response = response(false, vec![claim("C1", "Low", None)], None);

        let rendered = render_results(&response);
        let card = &rendered.cards[0];

        assert_eq!(card.pill.bucket, ConfidenceBucket::Low);
        assert_eq!(card.similarity, "Similarity: 0.000");
    }

    #[test]
    fn strong_evidence_count_is_case_sensitive_but_pill_is_not() {
        // "high" buckets into the high pill style yet does not count toward
        // the strong-evidence total, matching the summary's exact-label rule.
        let response = response(true, vec![claim("C1", "high", Some(0.9))], None);

        let rendered = render_results(&response);

        assert!(rendered
            .summary
            .contains("Strong evidence (High/Medium): 0"));
        assert_eq!(rendered.cards[0].pill.bucket, ConfidenceBucket::High);
        assert_eq!(rendered.cards[0].pill.label, "high");
    }

    #[test]
    fn medium_counts_toward_strong_evidence() {
        let response = response(
            true,
            vec![
                claim("C1", "Medium", Some(0.6)),
                claim("C2", "Low", Some(0.2)),
            ],
            None,
        );

        let rendered = render_results(&response);

        assert!(rendered.summary.contains("Claims found: 2"));
        assert!(rendered
            .summary
            .contains("Strong evidence (High/Medium): 1"));
    }

    #[test]
    fn snippet_and_url_render_when_present() {
        let mut with_evidence = claim("C1", "High", Some(0.81));
        with_evidence.best_match_snippet = Some("the sky is blue".to_string());
        with_evidence.best_match_url = Some("https://example.com/sky".to_string());

        let rendered = render_results(&response(true, vec![with_evidence], None));
        let card = &rendered.cards[0];

        assert_eq!(card.evidence, "Evidence: the sky is blue");
        assert_eq!(card.source_url.as_deref(), Some("https://example.com/sky"));
    }

    #[test]
    fn empty_confidence_label_renders_as_unknown() {
        let rendered = render_results(&response(false, vec![claim("C1", "", None)], None));
        let card = &rendered.cards[0];

        assert_eq!(card.pill.label, "Unknown");
        assert_eq!(card.pill.bucket, ConfidenceBucket::Low);
    }

    #[test]
    fn claims_render_in_server_order_one_indexed() {
        let response = response(
            true,
            vec![
                claim("first", "High", Some(0.9)),
                claim("second", "Low", Some(0.3)),
                claim("third", "Medium", Some(0.6)),
            ],
            None,
        );

        let rendered = render_results(&response);

        let headlines: Vec<&str> = rendered
            .cards
            .iter()
            .map(|card| card.headline.as_str())
            .collect();
        assert_eq!(headlines, vec!["1. first", "2. second", "3. third"]);
    }

    #[test]
    fn render_is_idempotent() {
        let response = response(
            true,
            vec![claim("C1", "High", Some(0.9)), claim("C2", "Low", None)],
            Some("two claims"),
        );

        let first = render_results(&response);
        let second = render_results(&response);

        assert_eq!(first, second);
        assert_eq!(second.cards.len(), 2);
    }

    #[test]
    fn similarity_formats_to_three_decimal_places() {
        assert_eq!(format_similarity(Some(0.9)), "0.900");
        assert_eq!(format_similarity(Some(0.12345)), "0.123");
        assert_eq!(format_similarity(Some(1.0)), "1.000");
        assert_eq!(format_similarity(Some(0.0)), "0.000");
        assert_eq!(format_similarity(None), "0.000");
    }
}
