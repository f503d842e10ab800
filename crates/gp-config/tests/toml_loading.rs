//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use gp_config::{GovProConfig, SiteKind};
use gp_core::enums::AiProvider;
use pretty_assertions::assert_eq;

fn from_toml(path: &str) -> Result<GovProConfig, gp_config::ConfigError> {
    GovProConfig::from_figment(
        &Figment::from(Serialized::defaults(GovProConfig::default())).merge(Toml::file(path)),
    )
}

#[test]
fn loads_general_and_notification_sections() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_template = "complex-rfp"
due_soon_hours = 24

[notifications]
stakeholder_roles = ["contracts_team"]
"#,
        )?;

        let config = from_toml("config.toml").expect("config loads");
        assert_eq!(config.general.default_template, "complex-rfp");
        assert_eq!(config.general.due_soon_hours, 24);
        assert_eq!(config.general.default_timezone, "UTC");
        assert_eq!(config.notifications.stakeholder_roles, vec!["contracts_team"]);
        Ok(())
    });
}

#[test]
fn loads_ai_section() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[ai]
provider = "custom"
custom_endpoint = "https://llm.example.gov/v1"
mock_latency_ms = 5
"#,
        )?;

        let config = from_toml("config.toml").expect("config loads");
        assert_eq!(config.ai.provider, AiProvider::Custom);
        assert_eq!(config.ai.endpoint(), Some("https://llm.example.gov/v1"));
        assert_eq!(config.ai.mock_latency_ms, 5);
        Ok(())
    });
}

#[test]
fn custom_provider_without_endpoint_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[ai]\nprovider = \"custom\"\n")?;
        assert!(from_toml("config.toml").is_err());
        Ok(())
    });
}

#[test]
fn loads_connector_sites() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[connectors.teams]
selected_channel = "Capture"
sync_with_planner = false

[[connectors.sharepoint.sites]]
url = "https://acmecorp.sharepoint.com/sites/GovProposals"
is_primary = true
kind = "primary"

[[connectors.sharepoint.sites]]
url = "https://acmecorp.sharepoint.com/sites/PastPerformance"
kind = "knowledge"

[connectors.onedrive]
folder_path = "/Apps/GovProAssistant"
"#,
        )?;

        let config = from_toml("config.toml").expect("config loads");
        assert_eq!(config.connectors.sharepoint.sites.len(), 2);
        assert_eq!(config.connectors.sharepoint.sites[1].kind, SiteKind::Knowledge);
        assert_eq!(config.connectors.teams.selected_channel, "Capture");
        assert!(!config.planner_sync_enabled());
        assert_eq!(config.connectors.onedrive.folder_path, "/Apps/GovProAssistant");
        assert!(config.connectors.googledrive.folder_path.is_empty());
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".govpro")?;
        jail.create_file(
            ".govpro/config.toml",
            "[general]\ndefault_template = \"complex-rfp\"\n",
        )?;

        let config = GovProConfig::load().expect("config loads");
        assert_eq!(config.general.default_template, "complex-rfp");
        Ok(())
    });
}
