//! Claim extraction from article bodies.
//!
//! A sentence is a candidate claim when it is longer than `MIN_CLAIM_CHARS`
//! and mentions one of the factual-indicator phrases.

pub const MAX_CLAIMS: usize = 5;
pub const MIN_CLAIM_CHARS: usize = 20;

const FACTUAL_INDICATORS: &[&str] = &[
    "according to",
    "statistics show",
    "data reveals",
    "study found",
    "research indicates",
    "government announced",
    "official report",
    "survey conducted",
    "analysis shows",
    "evidence suggests",
    "experts say",
    "officials stated",
    "ministry confirmed",
    "parliament passed",
    "policy states",
    "law requires",
    "regulation mandates",
    "budget allocates",
    "spending increased",
    "growth rate",
    "percentage of",
    "number of",
    "amount of",
    "compared to",
    "higher than",
    "lower than",
    "increased by",
    "decreased by",
];

/// Returns up to `MAX_CLAIMS` trimmed sentences, in document order.
pub fn extract_claims(body: &str) -> Vec<String> {
    body.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_CLAIM_CHARS)
        .filter(|s| {
            let lower = s.to_lowercase();
            FACTUAL_INDICATORS.iter().any(|i| lower.contains(i))
        })
        .take(MAX_CLAIMS)
        .map(str::to_string)
        .collect()
}
