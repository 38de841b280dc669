use std::env;

/// Environment variable holding the WeatherAPI.com key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Optional override for the API host, mostly useful against a local mock.
pub const BASE_URL_VAR: &str = "WEATHER_API_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com";

const CURRENT_PATH: &str = "/v1/current.json";

/// Process-wide settings, built once at startup and handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read configuration from the process environment.
    ///
    /// A missing key is not an error here: the empty key is sent as-is and the
    /// remote service answers with an authorization failure.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`], with the variable lookup supplied by the caller.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(api_key, base_url)
    }

    /// Full URL of the current-conditions endpoint, without query parameters.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CURRENT_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_BASE_URL)
    }
}
