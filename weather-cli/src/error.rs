use thiserror::Error;
use weather_core::FetchError;

/// Anticipated failures of one interactive lookup, each reported as a single line.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("City name cannot be empty.")]
    EmptyInput,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
