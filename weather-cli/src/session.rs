use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;
use weather_core::{WeatherError, WeatherProvider, WeatherQuery, presenter};

const BANNER: &str = "Welcome to the Weather App!";
const PROMPT: &str = "Enter city name: ";

/// How a single lookup ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Shown,
    Failed,
}

/// One interactive lookup: banner, prompt, fetch, print.
///
/// Lookup failures are written to `output` and end the run with [`Outcome::Failed`];
/// only console I/O errors are returned as `Err`.
pub async fn run<R, W>(
    provider: &dyn WeatherProvider,
    mut input: R,
    mut output: W,
) -> anyhow::Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{BANNER}")?;
    writeln!(output, "{}", "-".repeat(40))?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read city name")?;

    let outcome = match lookup(provider, &line).await {
        Ok(report) => {
            writeln!(output, "{report}")?;
            Outcome::Shown
        }
        Err(err) => {
            debug!(error = ?err, "weather lookup failed");
            writeln!(output, "{err}")?;
            Outcome::Failed
        }
    };
    output.flush()?;

    Ok(outcome)
}

async fn lookup(provider: &dyn WeatherProvider, city: &str) -> Result<String, WeatherError> {
    let query = WeatherQuery::new(city)?;
    let response = provider.current(&query).await?;
    presenter::render(response)
}
