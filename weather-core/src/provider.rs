use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{config::ProviderConfig, error::WeatherError, icon, model::WeatherReport};

/// Seam for the upstream weather provider.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Look up current weather for a free-text city name.
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

/// Lookup service backed by the OpenWeatherMap current-weather API.
///
/// Stateless beyond its immutable endpoint and credential, so it is safe to
/// share across any number of concurrent callers. Each lookup issues exactly
/// one outbound GET; there is no caching and no retrying here.
#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        tracing::debug!(city, "requesting current weather");

        let res = self
            .http
            .get(&self.api_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(translate_status(status, city, &body));
        }

        let mut report: WeatherReport = res.json().await?;
        enrich(&mut report);

        Ok(report)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        if city.trim().is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        self.fetch_current(city).await
    }
}

/// Map an upstream error status into the domain taxonomy. Statuses the
/// taxonomy does not anticipate keep their original status and body.
fn translate_status(status: StatusCode, city: &str, body: &str) -> WeatherError {
    match status {
        StatusCode::NOT_FOUND => WeatherError::CityNotFound(city.to_string()),
        StatusCode::UNAUTHORIZED => WeatherError::InvalidApiKey,
        StatusCode::SERVICE_UNAVAILABLE => WeatherError::ServiceUnavailable,
        _ => {
            tracing::warn!(%status, "unexpected status from weather provider");
            WeatherError::UpstreamStatus {
                status,
                body: truncate_body(body),
            }
        }
    }
}

/// Resolve the leading condition's code to a local icon asset. A report with
/// no conditions, or with a code the table does not know, passes through
/// unchanged.
fn enrich(report: &mut WeatherReport) {
    if let Some(first) = report.weather.first() {
        report.icon_file_name = icon::find_icon_file(&first.icon).map(str::to_string);
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
