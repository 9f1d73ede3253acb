//! Claim generators: the LLM-or-template fallback chain.
//!
//! A generator produces the *content* of a fact-check (verdict, confidence,
//! narrative, sources). Identity fields (id, claim, session id, timestamp) are
//! never taken from a generator; `ClaimAnalyzer` stamps them on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::fact_check::formats::{analyze_claim_structure, FactCheckFormat};
use crate::fact_check::prompts::{build_claim_prompt, CLAIM_SYSTEM};
use crate::fact_check::result::{
    clamp_confidence, ExpertOpinion, FactCheckResult, RelatedClaim, TimelineEvent, Verdict,
    VerifiedSource,
};
use crate::fact_check::topics::Topic;
use crate::llm_client::{CallOptions, LlmClient, LlmError};

/// Temperature for claim analysis calls.
const CLAIM_TEMPERATURE: f32 = 0.3;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Everything a generator may look at for one claim.
#[derive(Debug, Clone, Copy)]
pub struct GenerationInput<'a> {
    pub claim: &'a str,
    pub topic: Topic,
    pub format: Option<&'static FactCheckFormat>,
    pub additional_context: Option<&'a str>,
}

/// Generated content of a fact-check, before identity fields are stamped on.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub verdict: Verdict,
    pub confidence_score: u8,
    pub summary: String,
    pub detailed_analysis: String,
    pub key_points: Vec<String>,
    pub context: String,
    pub timeline: Vec<TimelineEvent>,
    pub sources: Vec<VerifiedSource>,
    pub related_claims: Vec<RelatedClaim>,
    pub government_response: Option<String>,
    pub expert_opinions: Vec<ExpertOpinion>,
}

impl Analysis {
    pub fn into_result(
        self,
        id: String,
        claim: String,
        session_id: String,
        created_at: DateTime<Utc>,
    ) -> FactCheckResult {
        FactCheckResult {
            id,
            claim,
            verdict: self.verdict,
            confidence_score: self.confidence_score,
            summary: self.summary,
            detailed_analysis: self.detailed_analysis,
            key_points: self.key_points,
            context: self.context,
            timeline: self.timeline,
            sources: self.sources,
            related_claims: self.related_claims,
            government_response: self.government_response,
            expert_opinions: self.expert_opinions,
            session_id,
            created_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("model returned an empty analysis")]
    EmptyAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// ClaimGenerator trait
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ClaimGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn generate(&self, input: &GenerationInput<'_>) -> Result<Analysis, GenerationError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmGenerator
// ────────────────────────────────────────────────────────────────────────────

/// Shape the model is asked to return. Every field is defaulted so a partial
/// answer still parses; range checks happen in `sanitize`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LlmDraft {
    verdict: Option<Verdict>,
    confidence_score: i64,
    summary: String,
    detailed_analysis: String,
    key_points: Vec<String>,
    context: String,
    timeline: Vec<TimelineEvent>,
    sources: Vec<VerifiedSource>,
    related_claims: Vec<DraftRelatedClaim>,
    government_response: Option<String>,
    expert_opinions: Vec<ExpertOpinion>,
}

/// Models answer `relatedClaims` either with full entries or with bare
/// strings. Anything else is kept as raw JSON and dropped in `sanitize`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DraftRelatedClaim {
    Text(String),
    Entry(RelatedClaimEntry),
    Other(serde_json::Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RelatedClaimEntry {
    id: String,
    claim: String,
    verdict: String,
    url: String,
    similarity: f32,
}

impl DraftRelatedClaim {
    fn into_related(self, index: usize) -> Option<RelatedClaim> {
        let entry = match self {
            DraftRelatedClaim::Text(claim) => RelatedClaimEntry {
                claim,
                ..Default::default()
            },
            DraftRelatedClaim::Entry(entry) => entry,
            DraftRelatedClaim::Other(_) => return None,
        };
        let claim = entry.claim.trim();
        if claim.is_empty() {
            return None;
        }
        Some(RelatedClaim {
            id: if entry.id.trim().is_empty() {
                format!("related_{}", index + 1)
            } else {
                entry.id
            },
            claim: claim.to_string(),
            verdict: normalize_verdict(&entry.verdict).as_str().to_string(),
            url: entry.url,
            similarity: entry.similarity.clamp(0.0, 1.0),
        })
    }
}

/// Maps loose verdict labels ("partially true", "False") onto `Verdict`.
fn normalize_verdict(raw: &str) -> Verdict {
    let label = raw.trim().to_uppercase().replace([' ', '-'], "_");
    serde_json::from_value(serde_json::Value::String(label)).unwrap_or(Verdict::Unverified)
}

impl LlmDraft {
    fn sanitize(self) -> Result<Analysis, GenerationError> {
        if self.summary.trim().is_empty() && self.detailed_analysis.trim().is_empty() {
            return Err(GenerationError::EmptyAnalysis);
        }

        let sources = self
            .sources
            .into_iter()
            .map(|mut s| {
                s.relevance = s.relevance.min(100);
                s.credibility_score = s.credibility_score.min(100);
                s
            })
            .collect();
        let related_claims = self
            .related_claims
            .into_iter()
            .enumerate()
            .filter_map(|(i, c)| c.into_related(i))
            .collect();

        Ok(Analysis {
            verdict: self.verdict.unwrap_or(Verdict::Unverified),
            confidence_score: clamp_confidence(self.confidence_score),
            summary: self.summary,
            detailed_analysis: self.detailed_analysis,
            key_points: self.key_points,
            context: self.context,
            timeline: self.timeline,
            sources,
            related_claims,
            government_response: self.government_response.filter(|r| !r.trim().is_empty()),
            expert_opinions: self.expert_opinions,
        })
    }
}

/// Single-shot LLM analysis driven by the topic's format.
pub struct LlmGenerator {
    llm: LlmClient,
}

impl LlmGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ClaimGenerator for LlmGenerator {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn generate(&self, input: &GenerationInput<'_>) -> Result<Analysis, GenerationError> {
        let structure = input.format.map(analyze_claim_structure);
        let criteria = input.format.map(|f| &f.output.verdict_criteria);
        let prompt = build_claim_prompt(
            input.claim,
            input.additional_context,
            structure.as_ref(),
            criteria,
        );

        let draft: LlmDraft = self
            .llm
            .call_json(
                &prompt,
                CLAIM_SYSTEM,
                CallOptions {
                    temperature: CLAIM_TEMPERATURE,
                },
            )
            .await?;

        draft.sanitize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_text;
    use std::time::Duration;

    #[test]
    fn test_out_of_range_confidence_is_clamped() {
        let draft: LlmDraft = parse_json_text(
            r#"{"verdict": "TRUE", "confidenceScore": 140, "summary": "Confirmed by RBI data."}"#,
        )
        .unwrap();
        let analysis = draft.sanitize().unwrap();
        assert_eq!(analysis.verdict, Verdict::True);
        assert_eq!(analysis.confidence_score, 100);

        let draft: LlmDraft =
            parse_json_text(r#"{"confidenceScore": -3, "summary": "s"}"#).unwrap();
        assert_eq!(draft.sanitize().unwrap().confidence_score, 0);
    }

    #[test]
    fn test_missing_verdict_becomes_unverified() {
        let draft: LlmDraft = parse_json_text(r#"{"summary": "Not enough data."}"#).unwrap();
        let analysis = draft.sanitize().unwrap();
        assert_eq!(analysis.verdict, Verdict::Unverified);
        assert!(analysis.key_points.is_empty());
        assert!(analysis.government_response.is_none());
    }

    #[test]
    fn test_empty_draft_is_rejected() {
        let draft: LlmDraft = parse_json_text(r#"{"verdict": "FALSE"}"#).unwrap();
        assert!(matches!(
            draft.sanitize(),
            Err(GenerationError::EmptyAnalysis)
        ));
    }

    #[test]
    fn test_unknown_verdict_fails_to_parse() {
        let result: Result<LlmDraft, _> =
            parse_json_text(r#"{"verdict": "SORT_OF", "summary": "s"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_source_scores_are_capped() {
        let draft: LlmDraft = parse_json_text(
            r#"{
                "summary": "s",
                "sources": [{
                    "id": "src_1", "name": "RBI", "type": "government",
                    "url": "https://rbi.org.in", "relevance": 250, "credibilityScore": 180
                }],
                "relatedClaims": [{
                    "id": "rc", "claim": "c", "verdict": "TRUE", "url": "u", "similarity": 3.5
                }]
            }"#,
        )
        .unwrap();
        let analysis = draft.sanitize().unwrap();
        assert_eq!(analysis.sources[0].relevance, 100);
        assert_eq!(analysis.sources[0].credibility_score, 100);
        assert_eq!(analysis.related_claims[0].similarity, 1.0);
    }

    #[test]
    fn test_loose_related_claims_keep_the_analysis() {
        let draft: LlmDraft = parse_json_text(
            r#"{
                "verdict": "FALSE",
                "confidenceScore": 80,
                "summary": "Roads rank 44th.",
                "relatedClaims": [
                    "India has the second-largest road network",
                    {"claim": "Highway building doubled", "verdict": "partially true"},
                    {"claim": "   "},
                    42
                ]
            }"#,
        )
        .unwrap();
        let analysis = draft.sanitize().unwrap();
        assert_eq!(analysis.verdict, Verdict::False);
        assert_eq!(analysis.related_claims.len(), 2);

        let first = &analysis.related_claims[0];
        assert_eq!(first.id, "related_1");
        assert_eq!(first.claim, "India has the second-largest road network");
        assert_eq!(first.verdict, "UNVERIFIED");
        assert_eq!(first.similarity, 0.0);

        let second = &analysis.related_claims[1];
        assert_eq!(second.id, "related_2");
        assert_eq!(second.verdict, "PARTIALLY_TRUE");
    }

    #[tokio::test]
    async fn test_llm_generator_surfaces_transport_errors() {
        let llm = LlmClient::new(
            "test-key".to_string(),
            "http://127.0.0.1:1/v1/messages".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();
        let generator = LlmGenerator::new(llm);
        let input = GenerationInput {
            claim: "GDP growth is 7%",
            topic: Topic::Economy,
            format: None,
            additional_context: None,
        };
        assert!(matches!(
            generator.generate(&input).await,
            Err(GenerationError::Llm(LlmError::Http(_)))
        ));
    }
}
