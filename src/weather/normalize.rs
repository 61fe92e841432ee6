//! Input normalization
//!
//! Coerces loosely-typed tool-call input into a strict query candidate.
//! Coordinates arrive as numbers or numeric strings; anything non-finite or
//! unparsable normalizes to absent rather than zero or NaN.

use crate::error::WeatherApiError;
use crate::weather::types::{Coordinate, RawToolInput, UnitSystem, WeatherQuery};

/// Normalized query with per-field presence
///
/// The query is complete, and a fetch may be attempted, only when latitude,
/// longitude, and the API key are all present.
#[derive(Debug, Clone, Default)]
pub struct QueryCandidate {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub api_key: Option<String>,
    pub units: UnitSystem,
    pub title: Option<String>,
}

impl QueryCandidate {
    /// Normalize raw tool input, falling back to a server-configured default
    /// key when the input carries none
    pub fn from_input(
        input: RawToolInput,
        default_api_key: Option<&str>,
    ) -> Result<Self, WeatherApiError> {
        let units = parse_units(input.units.as_deref())?;

        let api_key = input
            .api_key
            .filter(|k| !k.is_empty())
            .or_else(|| default_api_key.map(str::to_string));

        Ok(Self {
            latitude: normalize_coordinate(input.lat),
            longitude: normalize_coordinate(input.lon),
            api_key,
            units,
            title: input.title,
        })
    }

    /// Names of required fields that are absent
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.latitude.is_none() {
            missing.push("latitude");
        }
        if self.longitude.is_none() {
            missing.push("longitude");
        }
        if self.api_key.is_none() {
            missing.push("API key");
        }
        missing
    }

    /// The validated query, if all required fields are present
    pub fn complete(&self) -> Option<WeatherQuery> {
        Some(WeatherQuery {
            latitude: self.latitude?,
            longitude: self.longitude?,
            api_key: self.api_key.clone()?,
            units: self.units,
        })
    }
}

/// Coerce a number-or-string coordinate; non-finite values become absent
fn normalize_coordinate(value: Option<Coordinate>) -> Option<f64> {
    let parsed = match value? {
        Coordinate::Number(n) => n,
        Coordinate::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    parsed.is_finite().then_some(parsed)
}

/// Parse a unit system string; unspecified defaults to metric, anything
/// outside the three recognized values is rejected
fn parse_units(value: Option<&str>) -> Result<UnitSystem, WeatherApiError> {
    match value {
        None => Ok(UnitSystem::Metric),
        Some("standard") => Ok(UnitSystem::Standard),
        Some("metric") => Ok(UnitSystem::Metric),
        Some("imperial") => Ok(UnitSystem::Imperial),
        Some(other) => Err(WeatherApiError::InvalidUnits {
            value: other.to_string(),
        }),
    }
}
