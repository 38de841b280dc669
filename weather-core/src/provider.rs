use crate::{
    Config, CurrentResponse, WeatherError, WeatherQuery,
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `query`.
    ///
    /// Anything but a 200 with a JSON body is an error; no payload is returned.
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentResponse, WeatherError>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let provider = WeatherApiProvider::new(config.clone())?;
    Ok(Box::new(provider))
}
