//! # Application configuration — `datacollect.toml`
//!
//! The web and desktop binaries embed this file at build time. Every section
//! and every key is optional, so a missing or empty file is equivalent to the
//! default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [service]
//! base_url = "http://localhost:8000"   # where the Data Service listens
//!
//! [notifications]
//! auto_close_ms = 2000                 # toast lifetime
//!
//! [map]
//! zoom = 13
//! tile_url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the Data Service, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Tile template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_auto_close_ms() -> u64 {
    2000
}

fn default_zoom() -> u8 {
    13
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: default_auto_close_ms(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            tile_url: default_tile_url(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "datacollect.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to the defaults when the text is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("invalid {}: {}, using defaults", Self::filename(), e);
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.notifications.auto_close_ms, 2000);
        assert_eq!(config.map.zoom, 13);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [service]
            base_url = "https://records.example.org"

            [map]
            zoom = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.service.base_url, "https://records.example.org");
        assert_eq!(config.map.zoom, 15);
        assert_eq!(config.map.tile_url, default_tile_url());
        assert_eq!(config.notifications.auto_close_ms, 2000);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let config = AppConfig::from_toml_or_default("[service\nbase_url = 3");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.notifications.auto_close_ms = 3500;
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
