use std::fmt;

use crate::{
    error::WeatherError,
    model::{CurrentResponse, WeatherReading},
};

/// Extract the display fields from a decoded response and render them.
///
/// Fails with [`WeatherError::MissingField`] before producing any text if a
/// field is absent.
pub fn render(response: CurrentResponse) -> Result<String, WeatherError> {
    let reading = WeatherReading::try_from(response)?;
    Ok(reading.to_string())
}

/// Prints a number the way the API sent it: `70.0` stays `70.0`, `21.15` stays `21.15`.
struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weather in {}, {}:", self.city, self.country)?;
        writeln!(f, "Temperature (°F): {}°F", Number(self.temp_f))?;
        writeln!(f, "Temperature (°C): {}°C", Number(self.temp_c))?;
        writeln!(f, "Feels like (°F): {}°F", Number(self.feelslike_f))?;
        writeln!(f, "Feels like (°C): {}°C", Number(self.feelslike_c))?;
        writeln!(f, "Conditions: {}", self.condition)?;
        write!(f, "Last updated: {}", self.last_updated)
    }
}
