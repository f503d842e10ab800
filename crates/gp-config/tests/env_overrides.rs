use figment::Jail;
use gp_config::GovProConfig;
use gp_core::enums::AiProvider;

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("GOVPRO_AI__PROVIDER", "openai");
        jail.set_env("GOVPRO_GENERAL__DUE_SOON_HOURS", "12");

        let config = GovProConfig::load().expect("config loads");
        assert_eq!(config.ai.provider, AiProvider::OpenAi);
        assert_eq!(config.general.due_soon_hours, 12);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".govpro")?;
        jail.create_file(
            ".govpro/config.toml",
            "[general]\ndefault_template = \"complex-rfp\"\n",
        )?;
        jail.set_env("GOVPRO_GENERAL__DEFAULT_TEMPLATE", "standard-rfi");

        let config = GovProConfig::load().expect("config loads");
        assert_eq!(config.general.default_template, "standard-rfi");
        Ok(())
    });
}

#[test]
fn invalid_provider_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("GOVPRO_AI__PROVIDER", "skynet");
        assert!(GovProConfig::load().is_err());
        Ok(())
    });
}
