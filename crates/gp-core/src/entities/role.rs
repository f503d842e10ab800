use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named role with the persona prompt used for AI analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoleDefinition {
    /// Stable id, e.g. `capture_manager`. Survives renames.
    pub id: String,
    pub name: String,
    pub persona: String,
}

impl RoleDefinition {
    /// Derive a role id from a display name: lowercase, spaces to `_`.
    #[must_use]
    pub fn id_from_name(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("_")
    }
}
