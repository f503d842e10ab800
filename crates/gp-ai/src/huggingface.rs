//! Mocked Hugging Face inference provider.

use gp_core::entities::AnalysisResult;

use crate::{AiClient, error::AiError};

impl AiClient {
    pub(crate) async fn analyze_with_huggingface(
        &self,
        content: &str,
        persona: &str,
        _custom_prompt: Option<&str>,
    ) -> Result<AnalysisResult, AiError> {
        self.simulate_latency(3).await;
        let tag = self.tag();
        let words = content.split_whitespace().count();
        Ok(AnalysisResult {
            summary: format!("{tag} Reviewed {words} words of solicitation text for a {persona}."),
            key_requirements: vec![format!("{tag} Deliverables are listed in the statement of work.")],
            risks: vec![format!("{tag} Evaluation criteria weighting is unclear.")],
            recommendations: vec![format!(
                "{tag} Submit clarifying questions before the Q&A deadline."
            )],
        })
    }

    pub(crate) async fn diagram_with_huggingface(&self, prompt: &str) -> Result<String, AiError> {
        self.simulate_latency(2).await;
        Ok(format!(
            "```mermaid\nflowchart LR\n    A[Mock Hugging Face] --> B[{prompt}];\n```"
        ))
    }
}
