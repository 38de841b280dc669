//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration sourced from the environment
//! - The WeatherAPI.com provider and its failure classification
//! - Shared domain models (query, wire payload, reading)
//! - Plain-text rendering of a reading
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod presenter;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentResponse, WeatherQuery, WeatherReading};
pub use provider::{WeatherProvider, provider_from_config};
