//! Mocked custom-endpoint provider. Needs `ai.custom_endpoint`.

use gp_core::entities::AnalysisResult;

use crate::{AiClient, error::AiError};

impl AiClient {
    fn custom_endpoint(&self) -> Result<&str, AiError> {
        self.config.endpoint().ok_or_else(|| AiError::NotConfigured {
            provider: self.config.provider.label().to_string(),
            reason: String::from("Custom endpoint is not configured."),
        })
    }

    pub(crate) async fn analyze_with_custom(
        &self,
        _content: &str,
        persona: &str,
        _custom_prompt: Option<&str>,
    ) -> Result<AnalysisResult, AiError> {
        let endpoint = self.custom_endpoint()?;
        tracing::debug!(endpoint, "using custom analysis endpoint");
        self.simulate_latency(3).await;
        let tag = self.tag();
        Ok(AnalysisResult {
            summary: format!("{tag} Analysis from {endpoint} for a {persona}."),
            key_requirements: vec![format!("{tag} Requirement 1.")],
            risks: vec![format!("{tag} Risk 1.")],
            recommendations: vec![format!("{tag} Recommendation 1.")],
        })
    }

    pub(crate) async fn diagram_with_custom(&self, _prompt: &str) -> Result<String, AiError> {
        let endpoint = self.custom_endpoint()?;
        self.simulate_latency(2).await;
        Ok(format!(
            "```mermaid\ngraph TD\n    A[Custom Endpoint] --> B{{Diagram Prompt}};\n    B --> C[Result from {endpoint}];\n```"
        ))
    }
}
