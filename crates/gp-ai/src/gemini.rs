//! Mocked Google Gemini provider.
//!
//! Builds the same prompt the real model would receive and answers with a
//! JSON document that goes through [`crate::parse_analysis`], so malformed
//! answers fail the way a live response would.

use gp_core::entities::AnalysisResult;
use serde_json::json;

use crate::{AiClient, error::AiError, parse_analysis};

const DEFAULT_INSTRUCTION: &str = "Analyze the following RFI/RFP document.";

/// The user prompt sent alongside the persona system instruction.
#[must_use]
pub fn build_prompt(content: &str, custom_prompt: Option<&str>) -> String {
    let instruction = custom_prompt.unwrap_or(DEFAULT_INSTRUCTION);
    format!("{instruction}\nDocument Content:\n---\n{content}\n---\n")
}

impl AiClient {
    pub(crate) async fn analyze_with_gemini(
        &self,
        content: &str,
        persona: &str,
        custom_prompt: Option<&str>,
    ) -> Result<AnalysisResult, AiError> {
        let prompt = build_prompt(content, custom_prompt);
        self.simulate_latency(3).await;

        let tag = self.tag();
        let focus = custom_prompt.unwrap_or("general analysis");
        let answer = json!({
            "summary": format!(
                "{tag} {} characters reviewed for a {persona} ({focus}).",
                prompt.len()
            ),
            "keyRequirements": [format!("{tag} Meet every mandatory requirement in the solicitation.")],
            "risks": [format!("{tag} Submission deadline leaves little time for review cycles.")],
            "recommendations": [format!("{tag} Build a compliance matrix before drafting.")],
        });
        parse_analysis(&answer.to_string())
    }

    pub(crate) async fn diagram_with_gemini(&self, prompt: &str) -> Result<String, AiError> {
        self.simulate_latency(2).await;
        Ok(format!(
            "```mermaid\ngraph TD\n    A[Start] --> B{{{prompt}}};\n    B --> C[Done];\n```"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_wraps_content_between_rules() {
        let prompt = build_prompt("Section L", None);
        assert!(prompt.starts_with(DEFAULT_INSTRUCTION));
        assert!(prompt.contains("---\nSection L\n---"));

        let prompt = build_prompt("Section L", Some("List evaluation factors."));
        assert!(prompt.starts_with("List evaluation factors."));
    }
}
