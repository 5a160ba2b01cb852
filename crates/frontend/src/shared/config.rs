//! Runtime configuration.
//!
//! The embedded default is always valid. A deployment can override it with a
//! `<script type="application/toml" id="worldly-config">` block in index.html.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the country-data API.
    pub countries_url: String,
    /// Base URL of the identity provider.
    pub identity_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "debug".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
countries_url = "https://restcountries.com/v3.1"
identity_url = "/identity"

[logging]
level = "debug"
"#;

const CONFIG_ELEMENT_ID: &str = "worldly-config";

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let override_raw = read_page_override();
    match load_config(override_raw.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid page configuration, using defaults: {}", e);
            default_config()
        }
    }
});

/// Parse the override when present, otherwise the embedded default.
pub fn load_config(override_raw: Option<&str>) -> anyhow::Result<AppConfig> {
    match override_raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => Ok(toml::from_str(raw)?),
        None => Ok(toml::from_str(DEFAULT_CONFIG)?),
    }
}

fn default_config() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            countries_url: "https://restcountries.com/v3.1".to_string(),
            identity_url: "/identity".to_string(),
        },
        logging: LoggingConfig::default(),
    }
}

fn read_page_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Log level named in configuration, falling back to `Debug`.
pub fn log_level(config: &AppConfig) -> log::Level {
    config
        .logging
        .level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api.countries_url, "https://restcountries.com/v3.1");
        assert_eq!(config.api.identity_url, "/identity");
        assert_eq!(log_level(&config), log::Level::Debug);
    }

    #[test]
    fn test_override_without_logging_section() {
        let raw = r#"
            [api]
            countries_url = "http://localhost:8080/v3.1"
            identity_url = "http://localhost:9000"
        "#;
        let config = load_config(Some(raw)).unwrap();
        assert_eq!(config.api.countries_url, "http://localhost:8080/v3.1");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_blank_override_uses_default() {
        let config = load_config(Some("   \n")).unwrap();
        assert_eq!(config.api.identity_url, "/identity");
    }

    #[test]
    fn test_broken_override_is_an_error() {
        assert!(load_config(Some("[api]\ncountries_url = 3")).is_err());
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let mut config = load_config(None).unwrap();
        config.logging.level = "loud".into();
        assert_eq!(log_level(&config), log::Level::Debug);
        config.logging.level = "warn".into();
        assert_eq!(log_level(&config), log::Level::Warn);
    }
}
