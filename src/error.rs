//! Error types for the weather widget MCP server
//!
//! This module defines the error hierarchy for all operations in the server.

use thiserror::Error;

/// Main error type for the weather widget MCP server
#[derive(Error, Debug)]
pub enum WidgetServerError {
    /// Weather provider errors
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherApiError),

    /// Widget assembly errors
    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// MCP protocol errors
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Weather lookup errors
///
/// These surface to the end user as a `FetchState::Error` message; they are
/// never raised as protocol-level errors.
#[derive(Error, Debug)]
pub enum WeatherApiError {
    #[error("Missing {fields}.")]
    MissingFields { fields: String },

    #[error("Invalid unit system: {value} (expected standard, metric, or imperial)")]
    InvalidUnits { value: String },

    #[error("Weather request failed ({status})")]
    RequestFailed { status: u16 },

    #[error("{message}")]
    Transport { message: String },

    #[error("Failed to parse weather response: {message}")]
    Parse { message: String },
}

impl WeatherApiError {
    /// Transport error with a fallback message when the source carries none
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            WeatherApiError::Transport {
                message: "Unknown error loading weather data.".to_string(),
            }
        } else {
            WeatherApiError::Transport { message }
        }
    }
}

/// Widget assembly errors
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Widget bundle not found: {path}")]
    BundleMissing { path: String },

    #[error("Unknown widget resource: {uri}")]
    UnknownResource { uri: String },
}

/// Configuration errors
#[derive(Error, Debug)]
#[allow(dead_code)] // Some variants reserved for future use
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    MissingEnvVar { var: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// MCP protocol errors
#[derive(Error, Debug)]
#[allow(dead_code)] // Some variants reserved for future use
pub enum McpError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid tool arguments: {message}")]
    InvalidArguments { message: String },

    #[error("Protocol error: {message}")]
    ProtocolError { message: String },

    #[error("Transport error: {message}")]
    TransportError { message: String },
}

/// Result type alias for weather widget server operations
pub type Result<T> = std::result::Result<T, WidgetServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WeatherApiError::RequestFailed { status: 404 };
        assert_eq!(err.to_string(), "Weather request failed (404)");
    }

    #[test]
    fn test_transport_fallback_message() {
        let err = WeatherApiError::transport("");
        assert_eq!(err.to_string(), "Unknown error loading weather data.");

        let err = WeatherApiError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_error_conversion() {
        let weather_err = WeatherApiError::MissingFields {
            fields: "latitude".to_string(),
        };
        let server_err: WidgetServerError = weather_err.into();
        assert!(matches!(server_err, WidgetServerError::Weather(_)));
    }
}
