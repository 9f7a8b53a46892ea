//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The `WeatherData` observation and its best-effort JSON parser
//! - The HTTP client for the current-weather endpoint
//! - The console presenter
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod presenter;
pub mod provider;

pub use config::{Config, WeatherApiConfig};
pub use error::{FetchError, ParseError};
pub use model::WeatherData;
pub use parse::parse;
pub use presenter::render;
pub use provider::{WeatherProvider, openweather::WeatherClient};
