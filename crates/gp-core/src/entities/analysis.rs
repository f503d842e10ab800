use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured output of a document analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub key_requirements: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}
