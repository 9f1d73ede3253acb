//! Fact-check result records and the request that produces them.
//!
//! Wire format is camelCase to match the web client; verdicts serialize as
//! SCREAMING_SNAKE_CASE (`PARTIALLY_TRUE`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest and highest confidence a result may carry.
pub const MIN_CONFIDENCE: u8 = 0;
pub const MAX_CONFIDENCE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    True,
    False,
    PartiallyTrue,
    Misleading,
    Unverified,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::True => "TRUE",
            Verdict::False => "FALSE",
            Verdict::PartiallyTrue => "PARTIALLY_TRUE",
            Verdict::Misleading => "MISLEADING",
            Verdict::Unverified => "UNVERIFIED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub date: String,
    pub event: String,
    pub source: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Government,
    Academic,
    Media,
    International,
    Ngo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedSource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub url: String,
    /// 0 – 100
    pub relevance: u8,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub publish_date: String,
    /// 0 – 100
    pub credibility_score: u8,
    #[serde(default)]
    pub access_date: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub is_government_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedClaim {
    pub id: String,
    pub claim: String,
    pub verdict: String,
    pub url: String,
    pub similarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertOpinion {
    pub expert: String,
    pub affiliation: String,
    #[serde(default)]
    pub credentials: String,
    pub opinion: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

/// One completed analysis. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckResult {
    pub id: String,
    pub claim: String,
    pub verdict: Verdict,
    pub confidence_score: u8,
    pub summary: String,
    pub detailed_analysis: String,
    pub key_points: Vec<String>,
    pub context: String,
    pub timeline: Vec<TimelineEvent>,
    pub sources: Vec<VerifiedSource>,
    pub related_claims: Vec<RelatedClaim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub government_response: Option<String>,
    pub expert_opinions: Vec<ExpertOpinion>,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input to a single analysis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckRequest {
    pub claim: String,
    pub session_id: Option<String>,
    pub user_id: Option<String>,
    pub additional_context: Option<String>,
}

/// An ordered, append-only sequence of analyses sharing context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckSession {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub claims: Vec<FactCheckResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FactCheckSession {
    /// Prior claims joined in insertion order; the context for a continuation.
    pub fn previous_context(&self) -> String {
        self.claims
            .iter()
            .map(|c| c.claim.as_str())
            .collect::<Vec<_>>()
            .join(". ")
    }
}

/// `fact_<unix-millis>_<9 alphanumerics>`
pub fn new_result_id() -> String {
    prefixed_id("fact")
}

/// `session_<unix-millis>_<9 alphanumerics>`
pub fn new_session_id() -> String {
    prefixed_id("session")
}

fn prefixed_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}

/// Clamps any model-supplied confidence into the valid range.
pub fn clamp_confidence(raw: i64) -> u8 {
    raw.clamp(MIN_CONFIDENCE as i64, MAX_CONFIDENCE as i64) as u8
}
