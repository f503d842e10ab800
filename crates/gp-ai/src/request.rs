//! Analysis request assembly.

use serde::{Deserialize, Serialize};

use crate::error::AiError;

const SEPARATOR: &str = "\n\n---\n\n";

/// A document picked for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    /// MIME type, e.g. `text/plain`.
    pub media_type: String,
    pub text: String,
}

impl Document {
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            text: text.into(),
        }
    }

    /// Guess the media type from the file extension.
    #[must_use]
    pub fn from_file_name(name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        let lower = name.to_ascii_lowercase();
        let media_type = if lower.ends_with(".md") || lower.ends_with(".markdown") {
            "text/markdown"
        } else if lower.ends_with(".txt") {
            "text/plain"
        } else {
            "application/octet-stream"
        };
        Self::new(name, media_type, text)
    }

    /// Only plain text and markdown are read.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.media_type.as_str(), "text/plain" | "text/markdown")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub documents: Vec<Document>,
    pub persona: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

impl AnalysisRequest {
    #[must_use]
    pub fn new(documents: Vec<Document>, persona: impl Into<String>) -> Self {
        Self {
            documents,
            persona: persona.into(),
            custom_prompt: None,
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.custom_prompt = Some(prompt.into());
        self
    }

    /// Text of every compatible document, joined by a `---` rule.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Validation`] when there are no documents or none
    /// of them is text.
    pub fn combined_content(&self) -> Result<String, AiError> {
        if self.documents.is_empty() {
            return Err(AiError::Validation(String::from("No files to analyze.")));
        }
        let texts: Vec<&str> = self
            .documents
            .iter()
            .filter(|doc| doc.is_text())
            .map(|doc| doc.text.as_str())
            .collect();
        if texts.is_empty() {
            return Err(AiError::Validation(String::from(
                "No compatible files found.",
            )));
        }
        let skipped = self.documents.len() - texts.len();
        if skipped > 0 {
            tracing::debug!(skipped, "ignoring non-text documents");
        }
        Ok(texts.join(SEPARATOR))
    }
}
