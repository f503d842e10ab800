//! # gp-ai
//!
//! Document analysis and diagram generation for GovPro.
//!
//! [`AiClient`] dispatches on the configured provider:
//! - Google Gemini (default)
//! - `OpenAI`
//! - Azure `OpenAI`
//! - Hugging Face
//! - a custom endpoint
//!
//! Every provider is mocked and answers deterministically, tagged with its
//! label. [`prompts`] combines catalog templates into a custom prompt.
//! The workflow core never calls this crate; results land in
//! project-scoped scratch state through an [`AnalysisSlot`].

pub mod azure;
pub mod custom;
pub mod diagram;
pub mod gemini;
pub mod huggingface;
pub mod openai;
pub mod prompts;
pub mod request;
pub mod sequencer;

mod error;

pub use diagram::strip_mermaid_fences;
pub use error::AiError;
pub use prompts::{PromptTemplate, MAX_SELECTED};
pub use request::{AnalysisRequest, Document};
pub use sequencer::{AnalysisSlot, RequestSequencer, Ticket};

use std::time::Duration;

use gp_config::AiConfig;
use gp_core::entities::AnalysisResult;
use gp_core::enums::AiProvider;

// ── Client ─────────────────────────────────────────────────────────

/// Provider-switching AI client.
#[derive(Debug, Clone, Default)]
pub struct AiClient {
    config: AiConfig,
}

impl AiClient {
    #[must_use]
    pub const fn new(config: AiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn provider(&self) -> AiProvider {
        self.config.provider
    }

    /// Analyze already-combined document text from the point of view of
    /// `persona`.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the provider is not configured or its answer
    /// cannot be read as an analysis.
    pub async fn analyze_document(
        &self,
        content: &str,
        persona: &str,
        custom_prompt: Option<&str>,
    ) -> Result<AnalysisResult, AiError> {
        let custom_prompt = custom_prompt.map(str::trim).filter(|p| !p.is_empty());
        tracing::debug!(
            provider = %self.config.provider,
            bytes = content.len(),
            custom_prompt = custom_prompt.is_some(),
            "analyzing document"
        );
        match self.config.provider {
            AiProvider::GoogleGemini => self.analyze_with_gemini(content, persona, custom_prompt).await,
            AiProvider::OpenAi => self.analyze_with_openai(content, persona, custom_prompt).await,
            AiProvider::Azure => self.analyze_with_azure(content, persona, custom_prompt).await,
            AiProvider::HuggingFace => {
                self.analyze_with_huggingface(content, persona, custom_prompt)
                    .await
            }
            AiProvider::Custom => self.analyze_with_custom(content, persona, custom_prompt).await,
        }
    }

    /// Combine the request's documents and analyze them.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Validation`] when no document is plain text or
    /// markdown, otherwise whatever [`Self::analyze_document`] returns.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AiError> {
        let content = request.combined_content()?;
        self.analyze_document(&content, &request.persona, request.custom_prompt.as_deref())
            .await
    }

    /// Generate Mermaid code for `prompt`, without the surrounding fence.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Validation`] for an empty prompt and
    /// [`AiError::NotConfigured`] if the provider lacks settings.
    pub async fn generate_diagram(&self, prompt: &str) -> Result<String, AiError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AiError::Validation(String::from(
                "Please enter a description for the diagram.",
            )));
        }
        tracing::debug!(provider = %self.config.provider, "generating diagram");
        let raw = match self.config.provider {
            AiProvider::GoogleGemini => self.diagram_with_gemini(prompt).await?,
            AiProvider::OpenAi => self.diagram_with_openai(prompt).await?,
            AiProvider::Azure => self.diagram_with_azure(prompt).await?,
            AiProvider::HuggingFace => self.diagram_with_huggingface(prompt).await?,
            AiProvider::Custom => self.diagram_with_custom(prompt).await?,
        };
        Ok(strip_mermaid_fences(&raw))
    }

    /// Stand-in for the network round trip.
    async fn simulate_latency(&self, scale: u64) {
        let millis = self.config.mock_latency_ms.saturating_mul(scale) / 2;
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }

    fn tag(&self) -> String {
        format!("[Mock {}]", self.config.provider.label())
    }
}

/// Parse a provider's JSON answer into an [`AnalysisResult`].
///
/// # Errors
///
/// Returns [`AiError::Json`] for invalid JSON and
/// [`AiError::MalformedResponse`] when a field is missing or mistyped.
pub fn parse_analysis(json_text: &str) -> Result<AnalysisResult, AiError> {
    let value: serde_json::Value = serde_json::from_str(json_text.trim())?;

    let summary_ok = value
        .get("summary")
        .and_then(serde_json::Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !summary_ok {
        return Err(AiError::MalformedResponse(String::from("missing summary")));
    }
    for field in ["keyRequirements", "risks", "recommendations"] {
        if !value.get(field).is_some_and(serde_json::Value::is_array) {
            return Err(AiError::MalformedResponse(format!("'{field}' is not a list")));
        }
    }
    Ok(serde_json::from_value(value)?)
}
