use thiserror::Error;

/// Failure to turn a provider response body into [`crate::WeatherData`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("response is not a JSON object")]
    NotAnObject,
}

/// Everything that can go wrong while fetching the weather for one city.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered 404 for the queried city.
    #[error("City '{0}' not found.")]
    NotFound(String),

    /// The provider rejected the API key (401).
    #[error("Invalid API key. Please check your API key.")]
    Unauthorized,

    /// Any other non-success status code.
    #[error("Unable to fetch weather data. Status code: {0}")]
    UpstreamError(u16),

    /// DNS, connect, timeout or body read failures.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Failed to parse weather data: {0}")]
    Parse(#[from] ParseError),
}
