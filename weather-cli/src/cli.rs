use std::{io, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use weather_core::{Config, WeatherClient};

use crate::driver;

/// Top-level CLI struct. The lookup itself is interactive, so there are no flags
/// beyond `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Show the current weather for a city",
    long_about = "Prompts for a city name and prints its current weather.\n\n\
                  The API key and endpoint are read from the [weather_api] table of \
                  config.toml in the platform config directory."
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let path = Config::config_file_path()?;
        let config = Config::load_from(&path)?;
        info!(path = %path.display(), "Configuration loaded");

        let client = WeatherClient::from_config(&config.weather_api)
            .with_context(|| format!("Config file: {}", path.display()))?;

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout().lock();

        let outcome = driver::run(&mut input, &mut output, &client).await?;
        Ok(outcome.exit_code())
    }
}
