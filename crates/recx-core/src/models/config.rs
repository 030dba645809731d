//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{RecxError, Result};

/// Main configuration for the recx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecxConfig {
    /// Receipt extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Receipt extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency assumed when amounts are present but no code or symbol is.
    pub default_currency: String,

    /// How many leading non-empty lines are examined for the merchant name.
    pub header_window: usize,

    /// Maximum number of header lines joined into the merchant name.
    pub max_merchant_lines: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
            header_window: 5,
            max_merchant_lines: 3,
        }
    }
}

impl RecxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| RecxError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| RecxError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RecxConfig::default();
        assert_eq!(config.extraction.default_currency, "USD");
        assert_eq!(config.extraction.header_window, 5);
        assert_eq!(config.extraction.max_merchant_lines, 3);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: RecxConfig =
            serde_json::from_str(r#"{"extraction": {"default_currency": "EUR"}}"#).unwrap();
        assert_eq!(config.extraction.default_currency, "EUR");
        assert_eq!(config.extraction.header_window, 5);
    }
}
