//! Renderer
//!
//! Pure mapping from a successful observation to the display structure.
//! Idle, loading, and error states render nothing at all: the host never
//! flashes partial content before data is ready. (Preserved from the source
//! behavior; flagged in DESIGN.md as a product question, not changed here.)

use crate::config::openweather::ICON_BASE_URL;
use crate::weather::fetch::FetchState;
use crate::weather::format::{
    deg_to_compass, format_temperature, format_time_from_unix, format_updated_at,
    format_visibility, format_wind_speed,
};
use crate::weather::types::{UnitSystem, WeatherObservation};

/// Placeholder for absent detail metadata
const EM_DASH: &str = "\u{2014}";

/// Label used when neither a title nor a provider name is available
const DEFAULT_LOCATION_LABEL: &str = "Current Location";

/// Display structure for a successful observation
///
/// Every field is a ready-to-show string; optional source fields carry a
/// documented placeholder instead of being absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherView {
    pub location_label: String,
    pub updated_at: String,
    pub temperature: String,
    pub feels_like: String,
    pub condition_description: Option<String>,
    pub condition_icon_url: Option<String>,
    pub humidity: String,
    pub rain: Option<String>,
    pub wind_speed: String,
    pub wind_direction: String,
    pub wind_gust: Option<String>,
    pub visibility: String,
    pub cloud_cover: String,
    pub pressure: String,
    pub country: String,
    pub sunrise: String,
    pub sunset: String,
}

/// Map a fetch state to a view; only success produces output
pub fn render(state: &FetchState, units: UnitSystem, title: Option<&str>) -> Option<WeatherView> {
    match state {
        FetchState::Success { observation } => Some(render_observation(observation, units, title)),
        FetchState::Idle | FetchState::Loading | FetchState::Error { .. } => None,
    }
}

fn render_observation(
    observation: &WeatherObservation,
    units: UnitSystem,
    title: Option<&str>,
) -> WeatherView {
    let primary = observation.primary_condition();
    let wind = observation.wind.as_ref();
    let sys = observation.sys.as_ref();

    let location_label = title
        .map(str::to_string)
        .or_else(|| observation.name.clone())
        .unwrap_or_else(|| DEFAULT_LOCATION_LABEL.to_string());

    WeatherView {
        location_label,
        updated_at: format_updated_at(observation.dt, observation.timezone),
        temperature: format_temperature(observation.main.temp, units),
        feels_like: format_temperature(observation.main.feels_like, units),
        condition_description: primary.map(|c| c.description.clone()),
        condition_icon_url: primary.map(|c| format!("{ICON_BASE_URL}/{}@2x.png", c.icon)),
        humidity: format!("{}%", observation.main.humidity),
        rain: observation.rain_volume().map(|mm| format!("{mm:.1} mm")),
        wind_speed: format_wind_speed(wind.map(|w| w.speed), units),
        wind_direction: deg_to_compass(wind.and_then(|w| w.deg)),
        wind_gust: wind
            .and_then(|w| w.gust)
            .map(|gust| format!("Gusts {}", format_wind_speed(Some(gust), units))),
        visibility: format_visibility(observation.visibility),
        cloud_cover: observation
            .clouds
            .as_ref()
            .and_then(|c| c.all)
            .map_or_else(|| EM_DASH.to_string(), |pct| format!("Cloud cover {pct}%")),
        pressure: format!("{} hPa", observation.main.pressure),
        country: sys
            .and_then(|s| s.country.clone())
            .map_or_else(|| EM_DASH.to_string(), |c| format!("Country {c}")),
        sunrise: format_time_from_unix(sys.and_then(|s| s.sunrise), observation.timezone),
        sunset: format_time_from_unix(sys.and_then(|s| s.sunset), observation.timezone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(json: &str) -> WeatherObservation {
        serde_json::from_str(json).unwrap()
    }

    fn full_observation() -> WeatherObservation {
        observation(
            r#"{
                "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
                "main": {"temp": 18.2, "feels_like": 17.9, "temp_min": 16.0, "temp_max": 20.1,
                         "pressure": 1012, "humidity": 72},
                "wind": {"speed": 4.1, "deg": 250, "gust": 7.8},
                "name": "London",
                "dt": 1700000000,
                "timezone": 0,
                "sys": {"country": "GB", "sunrise": 1699999000, "sunset": 1700032000},
                "visibility": 10000,
                "rain": {"1h": 0.5},
                "clouds": {"all": 75}
            }"#,
        )
    }

    fn minimal_observation() -> WeatherObservation {
        observation(
            r#"{
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
                "main": {"temp": 290.2, "feels_like": 289.0, "temp_min": 288.0, "temp_max": 292.0,
                         "pressure": 1020, "humidity": 40},
                "dt": 1700000000,
                "timezone": 3600
            }"#,
        )
    }

    #[test]
    fn test_non_success_states_render_nothing() {
        assert!(render(&FetchState::Idle, UnitSystem::Metric, None).is_none());
        assert!(render(&FetchState::Loading, UnitSystem::Metric, None).is_none());
        let error = FetchState::Error {
            message: "boom".to_string(),
        };
        assert!(render(&error, UnitSystem::Metric, None).is_none());
    }

    #[test]
    fn test_full_observation_view() {
        let state = FetchState::Success {
            observation: full_observation(),
        };
        let view = render(&state, UnitSystem::Metric, None).unwrap();

        assert_eq!(view.location_label, "London");
        assert_eq!(view.temperature, "18\u{00B0}C");
        assert_eq!(view.feels_like, "18\u{00B0}C");
        assert_eq!(view.condition_description.as_deref(), Some("light rain"));
        assert_eq!(
            view.condition_icon_url.as_deref(),
            Some("https://openweathermap.org/img/wn/10d@2x.png")
        );
        assert_eq!(view.humidity, "72%");
        assert_eq!(view.rain.as_deref(), Some("0.5 mm"));
        assert_eq!(view.wind_speed, "4.1 m/s");
        assert_eq!(view.wind_direction, "WSW");
        assert_eq!(view.wind_gust.as_deref(), Some("Gusts 7.8 m/s"));
        assert_eq!(view.visibility, "10.0 km");
        assert_eq!(view.cloud_cover, "Cloud cover 75%");
        assert_eq!(view.pressure, "1012 hPa");
        assert_eq!(view.country, "Country GB");
        assert_eq!(view.sunrise, "21:56");
        assert_eq!(view.sunset, "07:06");
    }

    #[test]
    fn test_title_overrides_provider_name() {
        let state = FetchState::Success {
            observation: full_observation(),
        };
        let view = render(&state, UnitSystem::Metric, Some("Home")).unwrap();
        assert_eq!(view.location_label, "Home");
    }

    #[test]
    fn test_minimal_observation_uses_placeholders() {
        let state = FetchState::Success {
            observation: minimal_observation(),
        };
        let view = render(&state, UnitSystem::Standard, None).unwrap();

        assert_eq!(view.location_label, "Current Location");
        assert_eq!(view.temperature, "290K");
        assert!(view.rain.is_none());
        assert_eq!(view.wind_speed, "N/A");
        assert_eq!(view.wind_direction, "N/A");
        assert!(view.wind_gust.is_none());
        assert_eq!(view.visibility, "N/A");
        assert_eq!(view.cloud_cover, "\u{2014}");
        assert_eq!(view.country, "\u{2014}");
        assert_eq!(view.sunrise, "--:--");
        assert_eq!(view.sunset, "--:--");
    }

    #[test]
    fn test_imperial_temperature_rounds_with_suffix() {
        let mut obs = minimal_observation();
        obs.main.temp = 293.0;
        let state = FetchState::Success { observation: obs };
        let view = render(&state, UnitSystem::Imperial, None).unwrap();
        assert_eq!(view.temperature, "293\u{00B0}F");
    }
}
