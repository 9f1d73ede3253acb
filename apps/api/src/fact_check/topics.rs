//! Topic classification: keyword overlap against the static format table.
//!
//! A topic matches when at least `MATCH_THRESHOLD` of its keywords occur as
//! case-insensitive substrings of the claim. Topics are tried in table order
//! and the first to reach the threshold wins; there is no cross-topic scoring.

use serde::{Deserialize, Serialize};

use crate::fact_check::formats::{get_format, CLASSIFIED_TOPICS};

/// Minimum number of distinct keyword hits for a topic to match.
pub const MATCH_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Topic {
    Infrastructure,
    Environment,
    Economy,
    Health,
    General,
}

/// Classifies a claim into a topic. Pure and deterministic.
pub fn classify(claim: &str) -> Topic {
    let claim_lower = claim.to_lowercase();
    if claim_lower.trim().is_empty() {
        return Topic::General;
    }

    CLASSIFIED_TOPICS
        .iter()
        .copied()
        .find(|&topic| keyword_hits(topic, &claim_lower) >= MATCH_THRESHOLD)
        .unwrap_or(Topic::General)
}

/// Number of the topic's keywords present in an already lower-cased claim.
pub fn keyword_hits(topic: Topic, claim_lower: &str) -> usize {
    get_format(topic)
        .map(|format| {
            format
                .keywords
                .iter()
                .filter(|kw| claim_lower.contains(&kw.to_lowercase()))
                .count()
        })
        .unwrap_or(0)
}
