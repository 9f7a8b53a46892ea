use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, instrument, warn};

use crate::{
    config::WeatherApiConfig, error::FetchError, model::WeatherData, parse::parse,
};

use super::WeatherProvider;

/// Everything except the RFC 3986 unreserved characters is escaped, so a space
/// goes out as `%20` rather than the form-encoded `+`.
const QUERY_VALUE: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// HTTP client for an OpenWeatherMap-compatible "current weather" endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    endpoint: Url,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>, endpoint: Url) -> Self {
        Self { api_key: api_key.into(), endpoint, http: Client::new() }
    }

    /// Build a client from the `[weather_api]` settings, applying the optional timeout.
    pub fn from_config(config: &WeatherApiConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_owned();
        let endpoint = config.endpoint()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to initialise HTTP client")?;

        Ok(Self { api_key, endpoint, http })
    }

    /// `<endpoint>?q=<city>&appid=<key>&units=metric`, with `city` percent-encoded.
    ///
    /// A query already present on the endpoint is kept in front.
    pub fn request_url(&self, city: &str) -> Url {
        let params = format!(
            "q={}&appid={}&units=metric",
            utf8_percent_encode(city, QUERY_VALUE),
            utf8_percent_encode(&self.api_key, QUERY_VALUE),
        );

        let mut url = self.endpoint.clone();
        match self.endpoint.query().filter(|existing| !existing.is_empty()) {
            Some(existing) => url.set_query(Some(&format!("{existing}&{params}"))),
            None => url.set_query(Some(&params)),
        }
        url
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self, city: &str) -> Result<WeatherData, FetchError> {
        debug!("Requesting current weather");

        // Errors drop the URL so the API key never reaches messages or logs.
        let res = self
            .http
            .get(self.request_url(city))
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "Weather provider returned an error status");
            return Err(match status {
                StatusCode::NOT_FOUND => FetchError::NotFound(city.to_owned()),
                StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
                other => FetchError::UpstreamError(other.as_u16()),
            });
        }

        let body = res.text().await.map_err(reqwest::Error::without_url)?;
        let data = parse(&body)?;

        debug!(city = %data.city_name, country = %data.country, "Weather data parsed");
        Ok(data)
    }
}
