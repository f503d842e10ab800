//! Mocked `OpenAI` provider.

use gp_core::entities::AnalysisResult;

use crate::{AiClient, error::AiError};

impl AiClient {
    pub(crate) async fn analyze_with_openai(
        &self,
        _content: &str,
        persona: &str,
        _custom_prompt: Option<&str>,
    ) -> Result<AnalysisResult, AiError> {
        self.simulate_latency(3).await;
        let tag = self.tag();
        Ok(AnalysisResult {
            summary: format!(
                "{tag} Based on your role as a {persona}, this document outlines a new project opportunity."
            ),
            key_requirements: vec![
                format!("{tag} Requirement A from the document."),
                format!("{tag} Requirement B, which seems critical."),
                format!("{tag} A deadline of Q4 is mentioned."),
            ],
            risks: vec![
                format!("{tag} The timeline appears aggressive."),
                format!("{tag} There is a potential dependency on a third-party vendor."),
            ],
            recommendations: vec![
                format!("{tag} Schedule a meeting to clarify Requirement B."),
                format!("{tag} Begin assembling a project team immediately."),
            ],
        })
    }

    pub(crate) async fn diagram_with_openai(&self, prompt: &str) -> Result<String, AiError> {
        self.simulate_latency(2).await;
        Ok(format!(
            "```mermaid\ngraph TD\n    A[Mock OpenAI Start] --> B{{User Prompt: {prompt}}};\n    B --> C[Diagram Generated];\n```"
        ))
    }
}
