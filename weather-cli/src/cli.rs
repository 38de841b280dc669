use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use weather_core::{Config, provider_from_config};

use crate::{logging, session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Show current weather for a city")]
pub struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        logging::init(self.verbose);

        if let Err(err) = dotenvy::dotenv() {
            debug!("no .env loaded: {err}");
        }

        let config = Config::from_env();
        let provider =
            provider_from_config(&config).context("Failed to initialise HTTP client")?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let outcome = session::run(provider.as_ref(), stdin.lock(), stdout.lock()).await?;
        debug!(?outcome, "session finished");

        // Lookup failures have already been reported; the exit status stays 0.
        Ok(())
    }
}
