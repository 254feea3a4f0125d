//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Store presentation settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text, picking the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Store presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Store name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Symbol printed before prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Cave Crave".to_string()
}

fn default_currency_symbol() -> String {
    crave_commerce::money::DEFAULT_SYMBOL.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// TOML or JSON catalog file. The built-in menu is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Generate a default crave.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Cave Crave storefront configuration

[store]
name = "{name}"
currency_symbol = "{symbol}"

[catalog]
# TOML or JSON file with [[products]] and [[flavors]] tables.
# Leave unset to use the built-in menu.
# path = "menu.toml"

[logging]
# Overridden by RUST_LOG.
level = "warn"
"#,
        symbol = default_currency_symbol(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("crave.toml", "").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.store.name, "Cave Crave");
        assert_eq!(config.logging.level, "warn");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_generated_config_parses() {
        let content = generate_default_config("Crave Kiosk");
        let config = CliConfig::parse("crave.toml", &content).unwrap();
        assert_eq!(config.store.name, "Crave Kiosk");
        assert_eq!(config.store.currency_symbol, "\u{20b1}");
    }

    #[test]
    fn test_json_config() {
        let content = r#"{"catalog": {"path": "menu.json"}, "logging": {"level": "debug"}}"#;
        let config = CliConfig::parse("crave.json", content).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("menu.json"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(CliConfig::parse("crave.toml", "[store\nname =").is_err());
    }
}
