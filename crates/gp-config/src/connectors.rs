//! Mock data-connector settings (SharePoint, Teams, OneDrive, Google Drive).
//!
//! Nothing here talks to a real backend. The values are edited, validated and
//! read back, and `teams.sync_with_planner` mirrors the notification toggle
//! shown on the connectors screen.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteKind {
    #[default]
    Primary,
    Knowledge,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SharePointSite {
    pub url: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub kind: SiteKind,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SharePointConfig {
    #[serde(default)]
    pub sites: Vec<SharePointSite>,
}

fn default_channel() -> String {
    String::from("General")
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamsConfig {
    #[serde(default = "default_channel")]
    pub selected_channel: String,
    #[serde(default = "default_true")]
    pub sync_with_planner: bool,
    #[serde(default)]
    pub sync_with_forms: bool,
}

impl Default for TeamsConfig {
    fn default() -> Self {
        Self {
            selected_channel: default_channel(),
            sync_with_planner: true,
            sync_with_forms: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DriveConfig {
    #[serde(default)]
    pub folder_path: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub sharepoint: SharePointConfig,
    #[serde(default)]
    pub teams: TeamsConfig,
    #[serde(default)]
    pub onedrive: DriveConfig,
    #[serde(default)]
    pub googledrive: DriveConfig,
}

impl ConnectorConfig {
    /// The site marked primary, if any.
    pub fn primary_site(&self) -> Option<&SharePointSite> {
        self.sharepoint.sites.iter().find(|site| site.is_primary)
    }

    /// At most one primary SharePoint site; every URL must be `https://`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let primaries = self
            .sharepoint
            .sites
            .iter()
            .filter(|site| site.is_primary)
            .count();
        if primaries > 1 {
            return Err(ConfigError::InvalidValue {
                field: String::from("connectors.sharepoint.sites"),
                reason: format!("{primaries} sites are marked primary; at most one is allowed"),
            });
        }

        if let Some(site) = self
            .sharepoint
            .sites
            .iter()
            .find(|site| !site.url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: String::from("connectors.sharepoint.sites.url"),
                reason: format!("'{}' must use https", site.url),
            });
        }
        Ok(())
    }
}
