//! Unit and format library
//!
//! Pure functions converting raw measurement fields into display strings,
//! parameterized by unit system. Missing or non-finite inputs format as the
//! documented placeholder, never as NaN leaking into displayed text.

use chrono::DateTime;

use crate::weather::types::UnitSystem;

/// Placeholder for missing measurements
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for missing timestamps
pub const NO_TIME: &str = "--:--";

/// Format a temperature rounded to the nearest whole unit
pub fn format_temperature(value: f64, units: UnitSystem) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rounded = value.round() as i64;
    match units {
        UnitSystem::Metric => format!("{rounded}\u{00B0}C"),
        UnitSystem::Imperial => format!("{rounded}\u{00B0}F"),
        UnitSystem::Standard => format!("{rounded}K"),
    }
}

/// Format a wind speed with one decimal place
pub fn format_wind_speed(speed: Option<f64>, units: UnitSystem) -> String {
    let Some(speed) = speed.filter(|s| s.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };
    match units {
        UnitSystem::Imperial => format!("{speed:.1} mph"),
        UnitSystem::Metric | UnitSystem::Standard => format!("{speed:.1} m/s"),
    }
}

/// Format a visibility distance in meters
///
/// Zero is a valid value distinct from missing: it formats as "0 m".
pub fn format_visibility(visibility: Option<u32>) -> String {
    match visibility {
        None => NOT_AVAILABLE.to_string(),
        Some(v) if v >= 1000 => format!("{:.1} km", f64::from(v) / 1000.0),
        Some(v) => format!("{v} m"),
    }
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Bucket a bearing in degrees into one of 16 compass points
pub fn deg_to_compass(deg: Option<f64>) -> String {
    let Some(deg) = deg.filter(|d| d.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };
    let index = ((deg / 22.5).round() as i64).rem_euclid(16) as usize;
    COMPASS_POINTS[index].to_string()
}

/// Render a unix timestamp as a local "HH:MM" string
///
/// The timezone offset (seconds east of UTC) is applied before formatting.
pub fn format_time_from_unix(unix_time: Option<i64>, timezone_offset: i64) -> String {
    let Some(ts) = unix_time else {
        return NO_TIME.to_string();
    };
    match DateTime::from_timestamp(ts + timezone_offset, 0) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => NO_TIME.to_string(),
    }
}

/// Render the observation timestamp as a local date line for the header
pub fn format_updated_at(unix_time: i64, timezone_offset: i64) -> String {
    match DateTime::from_timestamp(unix_time + timezone_offset, 0) {
        Some(dt) => dt.format("%a, %d %b %Y %H:%M").to_string(),
        None => NO_TIME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_by_unit_system() {
        assert_eq!(format_temperature(18.4, UnitSystem::Metric), "18\u{00B0}C");
        assert_eq!(format_temperature(292.6, UnitSystem::Standard), "293K");
        assert_eq!(format_temperature(64.5, UnitSystem::Imperial), "65\u{00B0}F");
    }

    #[test]
    fn test_temperature_non_finite_is_placeholder() {
        assert_eq!(format_temperature(f64::NAN, UnitSystem::Metric), "N/A");
        assert_eq!(format_temperature(f64::INFINITY, UnitSystem::Metric), "N/A");
        assert_eq!(
            format_temperature(f64::NEG_INFINITY, UnitSystem::Imperial),
            "N/A"
        );
    }

    #[test]
    fn test_wind_speed_formatting() {
        assert_eq!(format_wind_speed(Some(4.12), UnitSystem::Metric), "4.1 m/s");
        assert_eq!(format_wind_speed(Some(4.12), UnitSystem::Standard), "4.1 m/s");
        assert_eq!(format_wind_speed(Some(9.3), UnitSystem::Imperial), "9.3 mph");
        assert_eq!(format_wind_speed(None, UnitSystem::Metric), "N/A");
        assert_eq!(format_wind_speed(Some(f64::NAN), UnitSystem::Metric), "N/A");
        assert_eq!(
            format_wind_speed(Some(f64::INFINITY), UnitSystem::Metric),
            "N/A"
        );
    }

    #[test]
    fn test_visibility_boundary() {
        assert_eq!(format_visibility(Some(1000)), "1.0 km");
        assert_eq!(format_visibility(Some(999)), "999 m");
    }

    #[test]
    fn test_visibility_zero_is_not_missing() {
        assert_eq!(format_visibility(Some(0)), "0 m");
        assert_eq!(format_visibility(None), "N/A");
    }

    #[test]
    fn test_visibility_kilometers_one_decimal() {
        assert_eq!(format_visibility(Some(10000)), "10.0 km");
        assert_eq!(format_visibility(Some(1250)), "1.2 km");
    }

    #[test]
    fn test_compass_is_periodic() {
        assert_eq!(deg_to_compass(Some(0.0)), "N");
        assert_eq!(deg_to_compass(Some(360.0)), "N");
    }

    #[test]
    fn test_compass_points() {
        assert_eq!(deg_to_compass(Some(90.0)), "E");
        assert_eq!(deg_to_compass(Some(180.0)), "S");
        assert_eq!(deg_to_compass(Some(270.0)), "W");
        assert_eq!(deg_to_compass(Some(22.5)), "NNE");
        // 11.24 rounds down to N, 11.26 rounds up to NNE
        assert_eq!(deg_to_compass(Some(11.24)), "N");
        assert_eq!(deg_to_compass(Some(11.26)), "NNE");
    }

    #[test]
    fn test_compass_negative_bearing_wraps() {
        assert_eq!(deg_to_compass(Some(-22.5)), "NNW");
    }

    #[test]
    fn test_compass_missing() {
        assert_eq!(deg_to_compass(None), "N/A");
        assert_eq!(deg_to_compass(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn test_time_applies_offset() {
        // 2023-11-14 22:13:20 UTC, +1h offset
        assert_eq!(format_time_from_unix(Some(1_700_000_000), 3600), "23:13");
        assert_eq!(format_time_from_unix(Some(1_700_000_000), 0), "22:13");
    }

    #[test]
    fn test_time_missing_placeholder() {
        assert_eq!(format_time_from_unix(None, 3600), "--:--");
    }

    #[test]
    fn test_updated_at_line() {
        assert_eq!(format_updated_at(1_700_000_000, 0), "Tue, 14 Nov 2023 22:13");
    }
}
