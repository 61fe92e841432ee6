//! Weather data types
//!
//! The OpenWeather current-conditions wire model and the query types derived
//! from tool input. Observations are serde round-trippable so a server-side
//! prefetch can be embedded verbatim as seed data for the client.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit system governing temperature and wind speed formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kelvin, m/s
    Standard,
    /// Celsius, m/s
    #[default]
    Metric,
    /// Fahrenheit, mph
    Imperial,
}

impl UnitSystem {
    /// Provider query-parameter value, `None` for standard (the API default)
    pub fn query_param(&self) -> Option<&'static str> {
        match self {
            UnitSystem::Standard => None,
            UnitSystem::Metric => Some("metric"),
            UnitSystem::Imperial => Some("imperial"),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Standard => write!(f, "standard"),
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

/// A single condition descriptor in an observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Provider condition code
    pub id: i64,

    /// Condition category (e.g. "Rain")
    pub main: String,

    /// Free-text description (e.g. "light rain")
    pub description: String,

    /// Icon identifier (e.g. "10d")
    pub icon: String,
}

/// Main measurements record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainMeasurements {
    /// Temperature in the requested unit system
    pub temp: f64,

    /// Perceived temperature
    pub feels_like: f64,

    pub temp_min: f64,
    pub temp_max: f64,

    /// Atmospheric pressure in hPa
    pub pressure: f64,

    /// Relative humidity percentage
    pub humidity: f64,
}

/// Wind record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    /// Speed in the requested unit system
    pub speed: f64,

    /// Direction in meteorological degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deg: Option<f64>,

    /// Gust speed, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gust: Option<f64>,
}

/// Country and sun times record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SysInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Sunrise unix timestamp (UTC seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<i64>,

    /// Sunset unix timestamp (UTC seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<i64>,
}

/// Cloud cover record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Clouds {
    /// Cover percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<f64>,
}

/// Current-conditions payload from the provider
///
/// Immutable once parsed; produced once per successful fetch and consumed
/// only by the renderer (or embedded as seed data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Condition descriptors, primary first
    pub weather: Vec<WeatherCondition>,

    pub main: MainMeasurements,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<Wind>,

    /// Provider-supplied location name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Observation unix timestamp (UTC seconds)
    pub dt: i64,

    /// Timezone offset from UTC in seconds
    pub timezone: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sys: Option<SysInfo>,

    /// Visibility in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<u32>,

    /// Precipitation volume keyed by window ("1h", "3h")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<BTreeMap<String, f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clouds: Option<Clouds>,
}

impl WeatherObservation {
    /// Primary condition descriptor, if the provider sent any
    pub fn primary_condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }

    /// Rain volume in mm, preferring the 1-hour window over the 3-hour one
    pub fn rain_volume(&self) -> Option<f64> {
        let rain = self.rain.as_ref()?;
        rain.get("1h").or_else(|| rain.get("3h")).copied()
    }
}

/// Coordinate accepted as a JSON number or a numeric string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

/// Loosely-typed tool-call input, before normalization
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawToolInput {
    #[serde(default)]
    pub lat: Option<Coordinate>,

    #[serde(default)]
    pub lon: Option<Coordinate>,

    #[serde(default, rename = "apiKey")]
    pub api_key: Option<String>,

    #[serde(default)]
    pub units: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

/// A fully validated weather query; all required fields present
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub api_key: String,
    pub units: UnitSystem,
}
