//! Mocked Azure `OpenAI` provider.

use gp_core::entities::AnalysisResult;

use crate::{AiClient, error::AiError};

impl AiClient {
    pub(crate) async fn analyze_with_azure(
        &self,
        _content: &str,
        persona: &str,
        _custom_prompt: Option<&str>,
    ) -> Result<AnalysisResult, AiError> {
        self.simulate_latency(3).await;
        let tag = self.tag();
        Ok(AnalysisResult {
            summary: format!(
                "{tag} The document has been analyzed from the perspective of a {persona}. It focuses on a high-value contract."
            ),
            key_requirements: vec![
                format!("{tag} Compliance with ISO 27001 is mandatory."),
                format!("{tag} The solution must be cloud-native."),
            ],
            risks: vec![format!(
                "{tag} The budget is not clearly defined in the document."
            )],
            recommendations: vec![
                format!("{tag} Form a working group to estimate the project cost."),
                format!("{tag} Verify our current ISO 27001 certification status."),
            ],
        })
    }

    pub(crate) async fn diagram_with_azure(&self, prompt: &str) -> Result<String, AiError> {
        self.simulate_latency(2).await;
        Ok(format!(
            "```mermaid\ngraph TD\n    A[Mock Azure AI] --> B{{Request: {prompt}}};\n    B --> C[Mermaid Code Created];\n```"
        ))
    }
}
