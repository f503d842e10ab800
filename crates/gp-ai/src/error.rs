//! AI client error types.

use thiserror::Error;

/// Errors from analysis and diagram requests.
#[derive(Debug, Error)]
pub enum AiError {
    /// The selected provider is missing required settings.
    #[error("{provider} is not configured: {reason}")]
    NotConfigured {
        /// Provider label, e.g. `Custom Endpoint`.
        provider: String,
        reason: String,
    },

    /// The request itself was unusable (no documents, empty prompt, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider answered with something that is not an analysis.
    #[error("AI response did not match the expected format: {0}")]
    MalformedResponse(String),

    #[error("The AI returned a response that was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
