//! Mermaid output cleanup.

const OPEN_FENCE: &str = "```mermaid";
const CLOSE_FENCE: &str = "```";

/// Strip a leading ```` ```mermaid ```` and a trailing ```` ``` ````, then
/// trim. Text without fences is only trimmed.
#[must_use]
pub fn strip_mermaid_fences(raw: &str) -> String {
    let code = raw.strip_prefix(OPEN_FENCE).unwrap_or(raw);
    let code = code.trim_end();
    let code = code.strip_suffix(CLOSE_FENCE).unwrap_or(code);
    code.trim().to_string()
}
