//! Narrative Report Generator: LLM first, templated report on any failure.

use tracing::{info, warn};

use crate::fact_check::result::clamp_confidence;
use crate::llm_client::{CallOptions, LlmClient};
use crate::report::models::{ComprehensiveReport, QueryVerdict, UserQueryResult};
use crate::report::prompts::{build_report_prompt, REPORT_SYSTEM};
use crate::report::templates;

const REPORT_TEMPERATURE: f32 = 0.4;

/// Lenient mirror of `UserQueryResult` for model output.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ReportDraft {
    verdict: Option<QueryVerdict>,
    confidence: i64,
    explanation: String,
    sources: Vec<String>,
    related_claims: Vec<String>,
    comprehensive: Option<ComprehensiveReport>,
}

impl ReportDraft {
    fn into_result(self, query: &str) -> Option<UserQueryResult> {
        if self.explanation.trim().is_empty() && self.comprehensive.is_none() {
            return None;
        }
        Some(UserQueryResult {
            query: query.to_string(),
            verdict: self.verdict.unwrap_or(QueryVerdict::Unverified),
            confidence: clamp_confidence(self.confidence),
            explanation: self.explanation,
            sources: self.sources,
            related_claims: self.related_claims,
            comprehensive: self.comprehensive,
        })
    }
}

pub struct ReportService {
    llm: Option<LlmClient>,
}

impl ReportService {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn process_query(&self, query: &str, context: Option<&str>) -> UserQueryResult {
        let Some(llm) = &self.llm else {
            return templates::render(query);
        };

        let prompt = build_report_prompt(query, context);
        let options = CallOptions {
            temperature: REPORT_TEMPERATURE,
        };
        match llm.call_json::<ReportDraft>(&prompt, REPORT_SYSTEM, options).await {
            Ok(draft) => match draft.into_result(query) {
                Some(result) => {
                    info!("Narrative report generated by LLM");
                    result
                }
                None => {
                    warn!("LLM returned an empty report, using template");
                    templates::render(query)
                }
            },
            Err(e) => {
                warn!("Report LLM call failed, using template: {}", e);
                templates::render(query)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_text;
    use std::time::Duration;

    #[tokio::test]
    async fn test_without_llm_uses_template() {
        let result = ReportService::new(None)
            .process_query("smart city progress", None)
            .await;
        assert_eq!(result.verdict, QueryVerdict::Mixed);
        assert_eq!(result.confidence, 75);
        assert_eq!(result.query, "smart city progress");
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back() {
        let llm = LlmClient::new(
            "test-key".to_string(),
            "http://127.0.0.1:1/v1/messages".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();
        let result = ReportService::new(Some(llm))
            .process_query("climate targets", Some("2030"))
            .await;
        assert_eq!(result.verdict, QueryVerdict::Mixed);
        assert_eq!(result.related_claims[0], "Global warming trends");
    }

    #[test]
    fn test_draft_is_sanitised() {
        let draft: ReportDraft = parse_json_text(
            r#"{"query": "something else", "verdict": "false", "confidence": 180,
                "explanation": "Contradicted by CAG audit."}"#,
        )
        .unwrap();
        let result = draft.into_result("original question").unwrap();
        assert_eq!(result.query, "original question");
        assert_eq!(result.verdict, QueryVerdict::False);
        assert_eq!(result.confidence, 100);
        assert!(result.comprehensive.is_none());
    }

    #[test]
    fn test_partial_comprehensive_section_parses() {
        let draft: ReportDraft = parse_json_text(
            r#"{"verdict": "true", "confidence": 60,
                "comprehensive": {"straightTalk": "Short.", "relatedTopics": ["a"]}}"#,
        )
        .unwrap();
        let report = draft.into_result("q").unwrap().comprehensive.unwrap();
        assert_eq!(report.straight_talk, "Short.");
        assert!(report.snapshot.is_empty());
        assert!(report.project_tracker.is_none());
    }

    #[test]
    fn test_empty_draft_is_rejected() {
        let draft: ReportDraft = parse_json_text(r#"{"verdict": "mixed"}"#).unwrap();
        assert!(draft.into_result("q").is_none());
    }
}
