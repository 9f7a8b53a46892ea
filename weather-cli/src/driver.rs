use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use tracing::{info, warn};
use weather_core::{WeatherProvider, render};

use crate::error::LookupError;

/// How a lookup session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Displayed,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Displayed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// Run one prompt -> fetch -> display cycle.
///
/// Lookup failures are written to `out` as `Error: <message>`; only I/O errors
/// on `input`/`out` are returned as `Err`.
pub async fn run<R, W, P>(input: &mut R, out: &mut W, provider: &P) -> io::Result<Outcome>
where
    R: BufRead,
    W: Write,
    P: WeatherProvider + ?Sized,
{
    writeln!(out, "=== Weather App ===\n")?;
    write!(out, "Enter city name: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let city = line.trim();

    let result = if city.is_empty() {
        Err(LookupError::EmptyInput)
    } else {
        write!(out, "\nFetching weather data for {city}...\n\n")?;
        out.flush()?;
        provider.fetch(city).await.map_err(LookupError::from)
    };

    match result {
        Ok(data) => {
            info!(city = %data.city_name, "Displaying weather");
            write!(out, "{}", render(&data))?;
            out.flush()?;
            Ok(Outcome::Displayed)
        }
        Err(err) => {
            warn!(error = ?err, "Lookup failed");
            writeln!(out, "Error: {err}")?;
            out.flush()?;
            Ok(Outcome::Failed)
        }
    }
}
