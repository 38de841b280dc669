use serde::Deserialize;

use crate::error::WeatherError;

/// A single city lookup, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    pub fn new(city: &str) -> Result<Self, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }

        Ok(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Body of a successful `current.json` response.
///
/// Display fields are optional here so that a well-formed document with a
/// missing key decodes, and the gap is reported by [`WeatherReading::try_from`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentResponse {
    pub location: Option<ApiLocation>,
    pub current: Option<ApiCurrent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiLocation {
    pub name: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCurrent {
    pub temp_f: Option<f64>,
    pub temp_c: Option<f64>,
    pub feelslike_f: Option<f64>,
    pub feelslike_c: Option<f64>,
    pub condition: Option<ApiCondition>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCondition {
    pub text: Option<String>,
}

/// Current conditions for one location, with every display field present.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    pub temp_f: f64,
    pub temp_c: f64,
    pub feelslike_f: f64,
    pub feelslike_c: f64,
    pub condition: String,
    pub last_updated: String,
}

fn require<T>(value: Option<T>, path: &'static str) -> Result<T, WeatherError> {
    value.ok_or(WeatherError::MissingField(path))
}

impl TryFrom<CurrentResponse> for WeatherReading {
    type Error = WeatherError;

    fn try_from(response: CurrentResponse) -> Result<Self, Self::Error> {
        let location = require(response.location, "location")?;
        let city = require(location.name, "location.name")?;
        let country = require(location.country, "location.country")?;

        let current = require(response.current, "current")?;
        let temp_f = require(current.temp_f, "current.temp_f")?;
        let temp_c = require(current.temp_c, "current.temp_c")?;
        let feelslike_f = require(current.feelslike_f, "current.feelslike_f")?;
        let feelslike_c = require(current.feelslike_c, "current.feelslike_c")?;
        let condition = require(current.condition, "current.condition")?;
        let condition = require(condition.text, "current.condition.text")?;
        let last_updated = require(current.last_updated, "current.last_updated")?;

        Ok(Self {
            city,
            country,
            temp_f,
            temp_c,
            feelslike_f,
            feelslike_c,
            condition,
            last_updated,
        })
    }
}
