use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryVerdict {
    True,
    False,
    Mixed,
    Unverified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub metric: String,
    pub claim: String,
    pub reality: String,
    pub implication: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromiseCheck {
    pub promise: String,
    pub reality: String,
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimVsReality {
    pub content: String,
    pub claims: Vec<PromiseCheck>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedProject {
    pub year: String,
    pub project_name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub status: String,
    pub cost: String,
    pub outcome_vs_promise: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureInvestment {
    pub project_name: String,
    pub planned_cost: String,
    pub purpose: String,
    pub viability: String,
    pub comments: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Government,
    Audit,
    Journalism,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedLink {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
}

/// The multi-section "straight talk" report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComprehensiveReport {
    pub straight_talk: String,
    pub snapshot: Vec<SnapshotRow>,
    pub claim_vs_reality: ClaimVsReality,
    pub ground_reality: String,
    pub stupid_performative: String,
    pub real_perspective: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_tracker: Option<Vec<TrackedProject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub future_investments: Option<Vec<FutureInvestment>>,
    pub solution: String,
    pub verified_links: Vec<VerifiedLink>,
    pub related_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQueryResult {
    pub query: String,
    pub verdict: QueryVerdict,
    pub confidence: u8,
    pub explanation: String,
    pub sources: Vec<String>,
    pub related_claims: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comprehensive: Option<ComprehensiveReport>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
    pub context: Option<String>,
}
