//! OpenWeather API client
//!
//! Issues the single outbound current-conditions request for a validated
//! query and maps failures into the weather error taxonomy.

use crate::config::openweather::API_BASE_URL;
use crate::error::WeatherApiError;
use crate::weather::types::{WeatherObservation, WeatherQuery};

/// HTTP client for the OpenWeather current-conditions endpoint
pub struct WeatherClient {
    http_client: reqwest::Client,
}

impl WeatherClient {
    /// Create a new weather client
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }

    /// Query parameters for a request; `units` is omitted for standard,
    /// which is the provider default
    pub fn request_params(query: &WeatherQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("lat", query.latitude.to_string()),
            ("lon", query.longitude.to_string()),
            ("appid", query.api_key.clone()),
        ];
        if let Some(units) = query.units.query_param() {
            params.push(("units", units.to_string()));
        }
        params
    }

    /// Fetch current conditions for a validated query
    ///
    /// Exactly one request per call: 2xx parses into an observation, any
    /// other status or transport failure maps to a terminal error.
    pub async fn current_conditions(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherObservation, WeatherApiError> {
        let response = self
            .http_client
            .get(API_BASE_URL)
            .query(&Self::request_params(query))
            .send()
            .await
            .map_err(|e| WeatherApiError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherApiError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherApiError::transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| WeatherApiError::Parse {
            message: e.to_string(),
        })
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::types::UnitSystem;

    fn query(units: UnitSystem) -> WeatherQuery {
        WeatherQuery {
            latitude: 40.7,
            longitude: -74.0,
            api_key: "abc".to_string(),
            units,
        }
    }

    #[test]
    fn test_params_include_units_for_metric() {
        let params = WeatherClient::request_params(&query(UnitSystem::Metric));
        assert!(params.contains(&("lat", "40.7".to_string())));
        assert!(params.contains(&("lon", "-74".to_string())));
        assert!(params.contains(&("appid", "abc".to_string())));
        assert!(params.contains(&("units", "metric".to_string())));
    }

    #[test]
    fn test_params_omit_units_for_standard() {
        let params = WeatherClient::request_params(&query(UnitSystem::Standard));
        assert!(!params.iter().any(|(name, _)| *name == "units"));
    }
}
