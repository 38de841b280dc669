use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{
    config::Config,
    error::WeatherError,
    model::{CurrentResponse, WeatherQuery},
};

use super::WeatherProvider;

/// WeatherAPI.com `current.json` client.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    config: Config,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(config: Config) -> Result<Self, WeatherError> {
        let http = Client::builder().build()?;
        Ok(Self { config, http })
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<CurrentResponse, WeatherError> {
        let url = self.config.endpoint();
        debug!(%url, city = query.city(), "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.config.api_key.as_str()), ("q", query.city())])
            .send()
            .await?;

        let status = res.status();
        debug!(status = status.as_u16(), "weather API responded");

        if status != StatusCode::OK {
            return Err(WeatherError::from_status(status.as_u16()));
        }

        let body = res.text().await?;
        let parsed: CurrentResponse = serde_json::from_str(&body)?;

        Ok(parsed)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentResponse, WeatherError> {
        self.fetch_current(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherReading;
    use httpmock::prelude::*;

    const PARIS: &str = r#"{"location":{"name":"Paris","country":"France"},"current":{"temp_f":70.0,"temp_c":21.1,"feelslike_f":68.0,"feelslike_c":20.0,"condition":{"text":"Sunny"},"last_updated":"2024-01-01 12:00"}}"#;

    fn provider_for(server: &MockServer) -> WeatherApiProvider {
        WeatherApiProvider::new(Config::new("KEY", server.base_url())).unwrap()
    }

    fn query(city: &str) -> WeatherQuery {
        WeatherQuery::new(city).unwrap()
    }

    #[tokio::test]
    async fn ok_response_is_decoded() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/current.json")
                    .query_param("key", "KEY")
                    .query_param("q", "Paris");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body(PARIS);
            })
            .await;

        let response = provider_for(&server).current(&query("Paris")).await.unwrap();
        mock.assert_async().await;

        let reading = WeatherReading::try_from(response).unwrap();
        assert_eq!(reading.city, "Paris");
        assert_eq!(reading.condition, "Sunny");
    }

    #[tokio::test]
    async fn city_with_spaces_is_encoded() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json").query_param("q", "New York");
                then.status(200).body(PARIS);
            })
            .await;

        let result = provider_for(&server).current(&query("New York")).await;
        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unauthorized_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json");
                then.status(401).body(r#"{"error":{"code":2006,"message":"API key is invalid."}}"#);
            })
            .await;

        let err = provider_for(&server).current(&query("Paris")).await.unwrap_err();
        assert!(matches!(err, WeatherError::Unauthorized));
    }

    #[tokio::test]
    async fn forbidden_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json");
                then.status(403).body(PARIS);
            })
            .await;

        let err = provider_for(&server).current(&query("Paris")).await.unwrap_err();
        assert!(matches!(err, WeatherError::Forbidden));
        assert_eq!(err.to_string(), "Error 403: Forbidden - Check your API key");
    }

    #[tokio::test]
    async fn other_statuses_never_decode_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json").query_param("q", "Nowhere");
                then.status(400).body(PARIS);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json").query_param("q", "Later");
                then.status(503);
            })
            .await;

        let provider = provider_for(&server);

        let err = provider.current(&query("Nowhere")).await.unwrap_err();
        assert!(matches!(err, WeatherError::HttpStatus(400)));
        assert_eq!(err.to_string(), "Error: 400");

        let err = provider.current(&query("Later")).await.unwrap_err();
        assert!(matches!(err, WeatherError::HttpStatus(503)));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = provider_for(&server).current(&query("Paris")).await.unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[tokio::test]
    async fn wrong_value_type_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/current.json");
                then.status(200).body(PARIS.replace("70.0", r#""warm""#));
            })
            .await;

        let err = provider_for(&server).current(&query("Paris")).await.unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        // Port 1 is reserved and nothing listens there in test environments.
        let config = Config::new("SUPERSECRET", "http://127.0.0.1:1");
        let provider = WeatherApiProvider::new(config).unwrap();

        let err = provider.current(&query("New York")).await.unwrap_err();
        assert!(matches!(err, WeatherError::Network(_)));

        let message = err.to_string();
        assert!(message.starts_with("Network error:"));
        assert!(!message.contains("SUPERSECRET"));
        assert!(!format!("{err:?}").contains("SUPERSECRET"));
    }
}
