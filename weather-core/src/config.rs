use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use reqwest::Url;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Settings for the weather provider endpoint.
///
/// Example TOML:
/// [weather_api]
/// api_key = "..."
/// base_url = "https://api.openweathermap.org/data/2.5/weather"
/// timeout_secs = 30
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout; the HTTP client's default applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self { api_key: String::new(), base_url: default_base_url(), timeout_secs: None }
    }
}

impl WeatherApiConfig {
    /// The endpoint as a parsed absolute URL.
    pub fn endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid weather API base_url '{}'", self.base_url))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(anyhow!(
                "Invalid weather API base_url '{}': unsupported scheme '{other}'",
                self.base_url
            )),
        }
    }

    /// The API key, or an error when none is configured.
    pub fn require_api_key(&self) -> Result<&str> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(anyhow!(
                "No API key configured.\n\
                 Hint: set `api_key` under [weather_api] in the config file."
            ));
        }
        Ok(key)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub weather_api: WeatherApiConfig,
}

impl Config {
    /// Load config from an explicit path, or defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = Config::load_from(&dir.path().join("config.toml")).expect("defaults");

        assert_eq!(cfg.weather_api.base_url, DEFAULT_BASE_URL);
        assert!(cfg.weather_api.api_key.is_empty());
        assert!(cfg.weather_api.timeout().is_none());
    }

    #[test]
    fn reads_all_weather_api_settings() {
        let file = write_config(
            r#"
            [weather_api]
            api_key = "KEY"
            base_url = "http://localhost:8080/weather"
            timeout_secs = 5
            "#,
        );

        let cfg = Config::load_from(file.path()).expect("valid config");
        assert_eq!(cfg.weather_api.require_api_key().expect("key set"), "KEY");
        assert_eq!(
            cfg.weather_api.endpoint().expect("url").as_str(),
            "http://localhost:8080/weather"
        );
        assert_eq!(cfg.weather_api.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn base_url_defaults_when_only_key_is_set() {
        let file = write_config("[weather_api]\napi_key = \"KEY\"\n");
        let cfg = Config::load_from(file.path()).expect("valid config");
        assert_eq!(cfg.weather_api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn malformed_toml_reports_path() {
        let file = write_config("[weather_api\napi_key = ");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let cfg = WeatherApiConfig { api_key: "   ".into(), ..Default::default() };
        let err = cfg.require_api_key().unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let cfg = WeatherApiConfig { base_url: "data/2.5/weather".into(), ..Default::default() };
        let err = cfg.endpoint().unwrap_err();
        assert!(err.to_string().contains("Invalid weather API base_url"));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let cfg = WeatherApiConfig {
            base_url: "ftp://example.com/weather".into(),
            ..Default::default()
        };
        let err = cfg.endpoint().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }
}
