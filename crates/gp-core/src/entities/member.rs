use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::MemberId;

/// A person on a project team.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    /// Stable reference into the role registry (`RoleDefinition::id`).
    pub role_id: String,
    /// Initials shown on cards, e.g. `AJ`.
    pub avatar: String,
    pub email: String,
    pub title: String,
    #[serde(default)]
    pub can_manage_roles: bool,
}

impl TeamMember {
    /// Uppercase initials of every whitespace-separated name part.
    #[must_use]
    pub fn initials(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Mock mailbox in the `first_last@govpro.com` form.
    #[must_use]
    pub fn mock_email(name: &str) -> String {
        let local = name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("_");
        format!("{local}@govpro.com")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_name() {
        assert_eq!(TeamMember::initials("Alex Johnson"), "AJ");
        assert_eq!(TeamMember::initials("mary ann  lee"), "MAL");
        assert_eq!(TeamMember::initials(""), "");
    }

    #[test]
    fn mock_email_joins_parts() {
        assert_eq!(TeamMember::mock_email("Charles Lee"), "charles_lee@govpro.com");
    }
}
