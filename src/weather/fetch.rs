//! Fetch state machine
//!
//! Owns the lifecycle of a single weather lookup: idle → loading →
//! (success | error). Seed data short-circuits straight to success with no
//! network call — duplicate calls would double-charge rate-limited API
//! usage, so this is a correctness requirement rather than an optimization.
//! Both execution contexts (server-side prefetch and the generated client
//! bootstrap contract) share this one module.

use crate::error::WeatherApiError;
use crate::weather::client::WeatherClient;
use crate::weather::normalize::QueryCandidate;
use crate::weather::types::{WeatherObservation, WeatherQuery};

/// Lifecycle state of one weather lookup; exactly one variant active
#[derive(Debug, Clone)]
pub enum FetchState {
    /// No attempt made
    Idle,
    /// Request in flight
    Loading,
    /// Terminal for this attempt
    Error { message: String },
    /// Terminal for this attempt
    Success { observation: WeatherObservation },
}

impl FetchState {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchState::Success { .. })
    }

    pub fn observation(&self) -> Option<&WeatherObservation> {
        match self {
            FetchState::Success { observation } => Some(observation),
            _ => None,
        }
    }
}

/// Proof that an attempt was started; resolving requires it back
///
/// Each `begin` bumps the lifecycle generation, so a token from a superseded
/// attempt no longer matches and its late resolution is ignored.
#[derive(Debug)]
#[must_use = "an unresolved attempt leaves the lifecycle loading"]
pub struct AttemptToken {
    generation: u64,
}

/// Owner of one widget instance's fetch state
///
/// Not shared across widget instances; a new query begins a fresh attempt on
/// the same lifecycle rather than mutating a terminal state in place.
#[derive(Debug)]
pub struct FetchLifecycle {
    state: FetchState,
    generation: u64,
}

impl FetchLifecycle {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }

    /// Current state, the only thing this component exposes
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Start an attempt for a query, superseding any attempt in flight
    ///
    /// Returns the validated query and an attempt token only when a network
    /// call is actually required: seeded initialization transitions straight
    /// to success and an incomplete query straight to error, both with zero
    /// outbound requests.
    pub fn begin(
        &mut self,
        candidate: &QueryCandidate,
        seed: Option<WeatherObservation>,
    ) -> Option<(WeatherQuery, AttemptToken)> {
        self.generation += 1;

        if let Some(observation) = seed {
            self.state = FetchState::Success { observation };
            return None;
        }

        match candidate.complete() {
            Some(query) => {
                self.state = FetchState::Loading;
                Some((
                    query,
                    AttemptToken {
                        generation: self.generation,
                    },
                ))
            }
            None => {
                let err = WeatherApiError::MissingFields {
                    fields: candidate.missing_fields().join(", "),
                };
                self.state = FetchState::Error {
                    message: err.to_string(),
                };
                None
            }
        }
    }

    /// Resolve an attempt; stale tokens are ignored so a superseded
    /// request's late result never overwrites a newer query's state
    pub fn resolve(
        &mut self,
        token: AttemptToken,
        outcome: Result<WeatherObservation, WeatherApiError>,
    ) -> bool {
        if token.generation != self.generation || !matches!(self.state, FetchState::Loading) {
            return false;
        }

        self.state = match outcome {
            Ok(observation) => FetchState::Success { observation },
            Err(err) => FetchState::Error {
                message: err.to_string(),
            },
        };
        true
    }

    /// Drive one full attempt: begin, perform the single outbound request if
    /// one is needed, and resolve
    pub async fn run_attempt(
        &mut self,
        client: &WeatherClient,
        candidate: &QueryCandidate,
        seed: Option<WeatherObservation>,
    ) -> &FetchState {
        if let Some((query, token)) = self.begin(candidate, seed) {
            let outcome = client.current_conditions(&query).await;
            self.resolve(token, outcome);
        }
        &self.state
    }
}

impl Default for FetchLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::types::{RawToolInput, UnitSystem};

    fn candidate(json: &str) -> QueryCandidate {
        let input: RawToolInput = serde_json::from_str(json).unwrap();
        QueryCandidate::from_input(input, None).unwrap()
    }

    fn complete_candidate() -> QueryCandidate {
        candidate(r#"{"lat": 40.7, "lon": -74.0, "apiKey": "abc"}"#)
    }

    fn observation(temp: f64) -> WeatherObservation {
        serde_json::from_str(&format!(
            r#"{{
                "weather": [{{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}}],
                "main": {{"temp": {temp}, "feels_like": {temp}, "temp_min": {temp}, "temp_max": {temp},
                         "pressure": 1015, "humidity": 50}},
                "dt": 1700000000,
                "timezone": 0
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_new_lifecycle_is_idle() {
        let lifecycle = FetchLifecycle::new();
        assert!(matches!(lifecycle.state(), FetchState::Idle));
    }

    #[test]
    fn test_seeded_init_skips_network() {
        let mut lifecycle = FetchLifecycle::new();
        // A token is the only way to reach the network; seeded begin must not
        // hand one out.
        let attempt = lifecycle.begin(&complete_candidate(), Some(observation(20.0)));
        assert!(attempt.is_none());
        assert!(lifecycle.state().is_success());
    }

    #[test]
    fn test_incomplete_query_errors_without_network() {
        let mut lifecycle = FetchLifecycle::new();
        let attempt = lifecycle.begin(&candidate(r#"{"lat": 40.7}"#), None);
        assert!(attempt.is_none());

        match lifecycle.state() {
            FetchState::Error { message } => {
                assert!(message.contains("longitude"));
                assert!(message.contains("API key"));
                assert!(!message.contains("latitude"));
            }
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_query_enters_loading() {
        let mut lifecycle = FetchLifecycle::new();
        let (query, _token) = lifecycle.begin(&complete_candidate(), None).unwrap();
        assert!(matches!(lifecycle.state(), FetchState::Loading));
        assert_eq!(query.units, UnitSystem::Metric);
    }

    #[test]
    fn test_resolve_success() {
        let mut lifecycle = FetchLifecycle::new();
        let (_query, token) = lifecycle.begin(&complete_candidate(), None).unwrap();
        assert!(lifecycle.resolve(token, Ok(observation(18.0))));
        assert!(lifecycle.state().is_success());
    }

    #[test]
    fn test_resolve_error_embeds_status() {
        let mut lifecycle = FetchLifecycle::new();
        let (_query, token) = lifecycle.begin(&complete_candidate(), None).unwrap();
        lifecycle.resolve(token, Err(WeatherApiError::RequestFailed { status: 401 }));

        match lifecycle.state() {
            FetchState::Error { message } => assert!(message.contains("401")),
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[test]
    fn test_last_query_wins() {
        let mut lifecycle = FetchLifecycle::new();

        // Earlier attempt still pending when a newer query begins.
        let (_q1, stale_token) = lifecycle.begin(&complete_candidate(), None).unwrap();
        let (_q2, fresh_token) = lifecycle
            .begin(&candidate(r#"{"lat": 51.5, "lon": -0.1, "apiKey": "abc"}"#), None)
            .unwrap();

        // The earlier fetch resolves after the later one started: ignored.
        assert!(!lifecycle.resolve(stale_token, Ok(observation(99.0))));
        assert!(matches!(lifecycle.state(), FetchState::Loading));

        assert!(lifecycle.resolve(fresh_token, Ok(observation(11.0))));
        let obs = lifecycle.state().observation().unwrap();
        assert_eq!(obs.main.temp, 11.0);
    }

    #[test]
    fn test_stale_token_cannot_clobber_terminal_state() {
        let mut lifecycle = FetchLifecycle::new();

        let (_q1, stale_token) = lifecycle.begin(&complete_candidate(), None).unwrap();
        let (_q2, fresh_token) = lifecycle.begin(&complete_candidate(), None).unwrap();

        assert!(lifecycle.resolve(fresh_token, Ok(observation(11.0))));
        assert!(!lifecycle.resolve(
            stale_token,
            Err(WeatherApiError::RequestFailed { status: 500 })
        ));
        assert!(lifecycle.state().is_success());
    }
}
