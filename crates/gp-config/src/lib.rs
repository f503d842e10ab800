//! # gp-config
//!
//! Layered configuration loading for GovPro using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GOVPRO_*` prefix, `__` as separator)
//! 2. Project-level `.govpro/config.toml`
//! 3. User-level `~/.config/govpro/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GOVPRO_AI__PROVIDER` -> `ai.provider`,
//! `GOVPRO_GENERAL__DUE_SOON_HOURS` -> `general.due_soon_hours`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gp_config::GovProConfig;
//!
//! let config = GovProConfig::load_with_dotenv().expect("config");
//! println!("AI provider: {}", config.ai.provider);
//! ```

mod ai;
mod connectors;
mod error;
mod general;
mod notifications;

pub use ai::AiConfig;
pub use connectors::{
    ConnectorConfig, DriveConfig, SharePointConfig, SharePointSite, SiteKind, TeamsConfig,
};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use notifications::NotificationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GovProConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub connectors: ConnectorConfig,
}

impl GovProConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".govpro/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GOVPRO_").split("__"))
    }

    /// Cross-section validation run after every extraction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_template.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: String::from("general.default_template"),
                reason: String::from("must not be empty"),
            });
        }
        self.ai.validate()?;
        self.connectors.validate()
    }

    /// Whether task creation with a due date sends a calendar invite.
    #[must_use]
    pub const fn planner_sync_enabled(&self) -> bool {
        self.connectors.teams.sync_with_planner
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("govpro").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
