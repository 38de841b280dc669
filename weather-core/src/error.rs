use thiserror::Error;

/// Everything that can end a weather lookup early.
///
/// The `Display` text of each variant is what the user sees on the console.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City name cannot be empty")]
    EmptyQuery,

    #[error("Error 401: Unauthorized - Invalid API key")]
    Unauthorized,

    #[error("Error 403: Forbidden - Check your API key")]
    Forbidden,

    #[error("Error: {0}")]
    HttpStatus(u16),

    #[error("Failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dotted path of the first key absent from an otherwise valid response.
    #[error("Weather response is missing field `{0}`")]
    MissingField(&'static str),

    /// Connection-level failure. The request URL is stripped since it carries the API key.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Network(err.without_url())
    }
}

impl WeatherError {
    /// Maps a non-200 HTTP status onto the matching failure.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => WeatherError::Unauthorized,
            403 => WeatherError::Forbidden,
            other => WeatherError::HttpStatus(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_are_distinct() {
        let unauthorized = WeatherError::from_status(401).to_string();
        let forbidden = WeatherError::from_status(403).to_string();

        assert!(unauthorized.contains("Unauthorized"));
        assert!(forbidden.contains("Forbidden"));
        assert_ne!(unauthorized, forbidden);
    }

    #[test]
    fn other_status_reports_code() {
        let err = WeatherError::from_status(503);
        assert!(matches!(err, WeatherError::HttpStatus(503)));
        assert_eq!(err.to_string(), "Error: 503");
    }
}
