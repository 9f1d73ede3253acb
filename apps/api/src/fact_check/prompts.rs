// LLM prompt constants for claim analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::fact_check::formats::{ClaimStructure, VerdictCriteria};
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION, SOURCING_INSTRUCTION};

/// System prompt for claim analysis.
pub const CLAIM_SYSTEM: &str = "You are an expert fact-checker specialising in Indian public \
    policy, infrastructure, environment, economy and health claims. You verify claims against \
    official government data, international institutions and peer-reviewed research. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Claim analysis prompt. Replace `{claim}`, `{context_block}`, `{plan_block}`,
/// `{json_only}` and `{sourcing}` before sending.
pub const CLAIM_PROMPT_TEMPLATE: &str = r#"Fact-check the following claim.

CLAIM: "{claim}"
{context_block}{plan_block}
Return a JSON object with this EXACT schema (no extra fields):
{
  "verdict": "TRUE | FALSE | PARTIALLY_TRUE | MISLEADING | UNVERIFIED",
  "confidenceScore": 0,
  "summary": "2-3 sentence verdict explanation",
  "detailedAnalysis": "multi-paragraph analysis, markdown allowed",
  "keyPoints": ["specific, sourced finding"],
  "context": "background needed to judge the claim",
  "timeline": [
    {"date": "YYYY-MM-DD", "event": "...", "source": "...", "sourceUrl": "https://...", "verified": true}
  ],
  "sources": [
    {
      "id": "src_1",
      "name": "...",
      "type": "government | academic | media | international | ngo",
      "url": "https://...",
      "relevance": 0,
      "excerpt": "...",
      "publishDate": "YYYY-MM-DD",
      "credibilityScore": 0,
      "accessDate": "YYYY-MM-DD",
      "documentType": "...",
      "isGovernmentVerified": false
    }
  ],
  "relatedClaims": [
    {"id": "rc_1", "claim": "a similar claim made elsewhere", "verdict": "TRUE | FALSE | PARTIALLY_TRUE | MISLEADING | UNVERIFIED", "url": "https://...", "similarity": 0.0}
  ],
  "governmentResponse": "official position, or null",
  "expertOpinions": [
    {"expert": "...", "affiliation": "...", "credentials": "...", "opinion": "...", "date": "YYYY-MM-DD"}
  ]
}

Rules:
- confidenceScore, relevance and credibilityScore are integers from 0 to 100.
- similarity is a number from 0 to 1.
- Order timeline events by date, oldest first.
- {sourcing}

{json_only}"#;

/// Builds the analysis prompt for one claim. `structure` and `criteria` are
/// present when the claim classified into a topic with a format.
pub fn build_claim_prompt(
    claim: &str,
    additional_context: Option<&str>,
    structure: Option<&ClaimStructure>,
    criteria: Option<&VerdictCriteria>,
) -> String {
    let context_block = match additional_context.map(str::trim) {
        Some(ctx) if !ctx.is_empty() => format!("\nADDITIONAL CONTEXT: {ctx}\n"),
        _ => String::new(),
    };

    let mut plan_block = String::new();
    if let Some(structure) = structure {
        // Serializing &'static tables cannot fail.
        let plan = serde_json::to_string_pretty(structure).unwrap_or_default();
        plan_block.push_str(&format!(
            "\nTOPIC: {}\nANALYSIS PLAN (cover every section, consult the expected sources):\n{plan}\n",
            structure.topic
        ));
    }
    if let Some(criteria) = criteria {
        plan_block.push_str("\nVERDICT CRITERIA:\n");
        for (verdict, conditions) in [
            ("TRUE", criteria.true_conditions),
            ("FALSE", criteria.false_conditions),
            ("PARTIALLY_TRUE", criteria.partially_true_conditions),
            ("MISLEADING", criteria.misleading_conditions),
            ("UNVERIFIED", criteria.unverified_conditions),
        ] {
            plan_block.push_str(&format!("- {verdict}: {}\n", conditions.join("; ")));
        }
    }

    fill_template(
        CLAIM_PROMPT_TEMPLATE,
        &[
            ("{sourcing}", SOURCING_INSTRUCTION.trim()),
            ("{json_only}", JSON_ONLY_INSTRUCTION),
            ("{plan_block}", &plan_block),
            ("{context_block}", &context_block),
            ("{claim}", claim),
        ],
    )
}
