//! Stakeholder notification settings.

use serde::{Deserialize, Serialize};

fn default_stakeholder_roles() -> Vec<String> {
    vec![
        String::from("capture_manager"),
        String::from("strategic_reviewer"),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Role ids notified when a blocked step is activated.
    #[serde(default = "default_stakeholder_roles")]
    pub stakeholder_roles: Vec<String>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            stakeholder_roles: default_stakeholder_roles(),
        }
    }
}

impl NotificationConfig {
    /// Whether members holding `role_id` hear about blocked steps.
    #[must_use]
    pub fn is_stakeholder(&self, role_id: &str) -> bool {
        self.stakeholder_roles.iter().any(|role| role == role_id)
    }
}
