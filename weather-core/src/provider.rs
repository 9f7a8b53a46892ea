use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::FetchError, model::WeatherData};

pub mod openweather;

/// Source of current-weather observations, looked up by city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current weather for `city`. Issues at most one request.
    async fn fetch(&self, city: &str) -> Result<WeatherData, FetchError>;
}
