//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_template() -> String {
    String::from("standard-rfi")
}

/// Default due-soon window in hours.
const fn default_due_soon_hours() -> u32 {
    48
}

fn default_timezone() -> String {
    String::from("UTC")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Template id used when a new project does not name one.
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Tasks due within this many hours are flagged as due soon.
    #[serde(default = "default_due_soon_hours")]
    pub due_soon_hours: u32,

    /// Timezone label attached to new due dates when none is given.
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            due_soon_hours: default_due_soon_hours(),
            default_timezone: default_timezone(),
        }
    }
}
