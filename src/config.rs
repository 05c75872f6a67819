use std::time::Duration;

use crate::error::{Result, TourGuideError};

/// Base URL used when `TOUR_GUIDE_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";
/// Fixed path of the itinerary endpoint.
pub const TOUR_PLAN_PATH: &str = "/api/tour-plan";

pub const BASE_URL_ENV: &str = "TOUR_GUIDE_API_URL";
pub const TIMEOUT_ENV: &str = "TOUR_GUIDE_TIMEOUT_SECS";

/// Client configuration, resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourGuideConfig {
    pub base_url: String,
    /// `None` leaves the HTTP client's own default in place.
    pub timeout: Option<Duration>,
}

impl Default for TourGuideConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl TourGuideConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = read(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match read(TIMEOUT_ENV) {
            Some(raw) => {
                let seconds: u64 = raw.trim().parse().map_err(|_| {
                    TourGuideError::Config(format!(
                        "{} must be a whole number of seconds, got '{}'",
                        TIMEOUT_ENV, raw
                    ))
                })?;
                Some(Duration::from_secs(seconds))
            }
            None => None,
        };

        Ok(Self { base_url, timeout })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full endpoint URL for itinerary requests.
    pub fn tour_plan_url(&self) -> String {
        build_tour_plan_url(&self.base_url)
    }
}

fn build_tour_plan_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with(TOUR_PLAN_PATH) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, TOUR_PLAN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = TourGuideConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TourGuideConfig::default());
        assert_eq!(config.tour_plan_url(), "http://localhost:5001/api/tour-plan");
    }

    #[test]
    fn test_env_values() {
        let config = TourGuideConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "https://tours.example.com/"),
            (TIMEOUT_ENV, "45"),
        ]))
        .unwrap();
        assert_eq!(config.tour_plan_url(), "https://tours.example.com/api/tour-plan");
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_blank_base_url_uses_default() {
        let config = TourGuideConfig::from_lookup(lookup(&[(BASE_URL_ENV, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_bad_timeout_is_config_error() {
        let err = TourGuideConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_url_not_duplicated() {
        assert_eq!(
            build_tour_plan_url("http://host:9/api/tour-plan/"),
            "http://host:9/api/tour-plan"
        );
    }
}
