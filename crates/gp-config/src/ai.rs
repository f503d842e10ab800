//! AI provider configuration.

use gp_core::enums::AiProvider;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AiConfig {
    /// Which backend handles analysis and diagram requests.
    #[serde(default)]
    pub provider: AiProvider,

    /// Endpoint URL for the `custom` provider.
    #[serde(default)]
    pub custom_endpoint: String,

    /// Simulated round-trip latency of the mocked providers.
    #[serde(default)]
    pub mock_latency_ms: u64,
}

impl AiConfig {
    /// Check that the selected provider has what it needs.
    pub fn is_configured(&self) -> bool {
        self.provider != AiProvider::Custom || !self.custom_endpoint.is_empty()
    }

    /// The custom endpoint, if the custom provider is selected and set.
    pub fn endpoint(&self) -> Option<&str> {
        (self.provider == AiProvider::Custom && !self.custom_endpoint.is_empty())
            .then_some(self.custom_endpoint.as_str())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: String::from("ai.custom_endpoint"),
            });
        }
        if !self.custom_endpoint.is_empty()
            && !self.custom_endpoint.starts_with("http://")
            && !self.custom_endpoint.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: String::from("ai.custom_endpoint"),
                reason: format!("'{}' is not an http(s) URL", self.custom_endpoint),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_needs_no_endpoint() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProvider::GoogleGemini);
        assert!(config.is_configured());
        assert!(config.endpoint().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_provider_requires_endpoint() {
        let mut config = AiConfig {
            provider: AiProvider::Custom,
            ..AiConfig::default()
        };
        assert!(!config.is_configured());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));

        config.custom_endpoint = String::from("https://llm.internal/v1");
        assert_eq!(config.endpoint(), Some("https://llm.internal/v1"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = AiConfig {
            provider: AiProvider::Custom,
            custom_endpoint: String::from("ftp://nope"),
            mock_latency_ms: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
