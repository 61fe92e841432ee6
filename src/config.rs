//! Configuration management for the weather widget MCP server
//!
//! Handles environment variables, artifact paths, and provider constants.

use std::path::PathBuf;

/// Configuration for the weather widget MCP server
///
/// Re-read from the environment at request time so a key rotation takes
/// effect without a restart; nothing here is cached between invocations.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server-held default OpenWeather API key, if configured
    pub default_api_key: Option<String>,

    /// Path to the compiled client bundle artifact
    pub bundle_path: PathBuf,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let default_api_key = std::env::var(env_vars::OPENWEATHER_API_KEY)
            .or_else(|_| std::env::var(env_vars::WEATHER_API_KEY))
            .ok()
            .filter(|key| !key.trim().is_empty());

        let bundle_path = std::env::var(env_vars::WEATHER_WIDGET_BUNDLE)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BUNDLE_PATH));

        Self {
            default_api_key,
            bundle_path,
        }
    }

    /// Configuration with an explicit key and bundle path, bypassing the
    /// environment
    pub fn with_values(default_api_key: Option<String>, bundle_path: impl Into<PathBuf>) -> Self {
        Self {
            default_api_key,
            bundle_path: bundle_path.into(),
        }
    }
}

/// Default location of the compiled client bundle
pub const DEFAULT_BUNDLE_PATH: &str = "dist/weatherWidget.js";

/// Environment variable names
pub mod env_vars {
    /// Preferred variable for the server-held API key
    pub const OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";

    /// Legacy fallback variable for the server-held API key
    pub const WEATHER_API_KEY: &str = "WEATHER_API_KEY";

    /// Overrides the bundle artifact path
    pub const WEATHER_WIDGET_BUNDLE: &str = "WEATHER_WIDGET_BUNDLE";
}

/// OpenWeather API constants
pub mod openweather {
    /// Current-conditions endpoint
    pub const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

    /// Condition icon base URL
    pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = Config::with_values(Some("abc".to_string()), "build/widget.js");
        assert_eq!(config.default_api_key.as_deref(), Some("abc"));
        assert_eq!(config.bundle_path, PathBuf::from("build/widget.js"));
    }

    #[test]
    fn test_default_bundle_path() {
        assert!(DEFAULT_BUNDLE_PATH.ends_with("weatherWidget.js"));
    }
}
