// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every fact-checking prompt.
pub const SOURCING_INSTRUCTION: &str = "\
    CRITICAL: Back every statement with a named, verifiable source. \
    Prefer official government statistics, then international institutions, \
    then peer-reviewed research. Never invent URLs; if you do not know a URL, \
    use the publisher's home page. If the evidence is insufficient, say so and \
    use the UNVERIFIED verdict.";

/// Substitutes placeholders in a single left-to-right pass. Inserted values
/// are never rescanned, so user text containing `{json_only}` stays literal.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
