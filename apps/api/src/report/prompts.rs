// LLM prompt constants for the narrative report.

use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};

pub const REPORT_SYSTEM: &str = "You are a brutally honest fact-checker who exposes truth with \
    data, sarcasm, and global perspective. Always back claims with official sources.";

/// Replace `{query}`, `{context_block}` and `{json_only}` before sending.
pub const REPORT_PROMPT_TEMPLATE: &str = r#"You are an expert fact-checker with a brutally honest, no-nonsense approach. A user has asked: "{query}"
{context_block}
Provide a comprehensive fact-check using this EXACT format:

{
  "query": "the user's question",
  "verdict": "true | false | mixed | unverified",
  "confidence": 0,
  "explanation": "Brief explanation",
  "sources": ["source1", "source2"],
  "relatedClaims": ["claim1", "claim2"],
  "comprehensive": {
    "straightTalk": "50-100 words: bold, brutally honest intro",
    "snapshot": [
      {"metric": "Key indicator", "claim": "Official promise", "reality": "Verified ground data", "implication": "What this means"}
    ],
    "claimVsReality": {
      "content": "120-200 words: major official promises vs actual outcomes with data",
      "claims": [
        {"promise": "Official statement", "reality": "Ground truth", "source": "Verification source"}
      ]
    },
    "groundReality": "120-200 words: achievements, delays, red flags",
    "stupidPerformative": "120-200 words: overhyped policies, ceremonial stunts, budget misallocation",
    "realPerspective": "120-200 words: comparison with the developed world, hard questions",
    "projectTracker": [
      {"year": "YYYY", "projectName": "...", "type": "...", "status": "...", "cost": "...", "outcomeVsPromise": "..."}
    ],
    "futureInvestments": [
      {"projectName": "...", "plannedCost": "...", "purpose": "...", "viability": "...", "comments": "..."}
    ],
    "solution": "120-200 words: practical fixes from global models",
    "verifiedLinks": [
      {"title": "Link title", "url": "Official .gov.in or reputed source", "type": "government | audit | journalism"}
    ],
    "relatedTopics": ["Connected issue 1", "Connected issue 2", "Connected issue 3"]
  }
}

Omit projectTracker and futureInvestments when the question is not about specific projects.
confidence is an integer from 0 to 100.
Be brutally honest, use sarcasm where appropriate, but back everything with data and sources.

{json_only}"#;

pub fn build_report_prompt(query: &str, context: Option<&str>) -> String {
    let context_block = match context.map(str::trim) {
        Some(ctx) if !ctx.is_empty() => format!("\nCONTEXT: {ctx}\n"),
        _ => String::new(),
    };
    fill_template(
        REPORT_PROMPT_TEMPLATE,
        &[
            ("{json_only}", JSON_ONLY_INSTRUCTION),
            ("{context_block}", &context_block),
            ("{query}", query),
        ],
    )
}
