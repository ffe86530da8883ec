//! HTTP client for the place-search, weather and forecast endpoints.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::suggest::decode_suggestions;
use crate::types::{
    ForecastEntry, LocationQuery, SuggestionList, WeatherBundle, WeatherError, WeatherSnapshot,
};

const AUTOCOMPLETE_PATH: &str = "/api/autocomplete";
const WEATHER_PATH: &str = "/api/weather";
const FORECAST_PATH: &str = "/api/forecast";
const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct WeatherPayload {
    city: String,
    #[serde(default)]
    description: String,
    icon: Option<String>,
    temp: f64,
    feels_like: Option<f64>,
    daily_low: Option<f64>,
    daily_high: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
    wind_speed: Option<f64>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
    map_url: Option<String>,
}

impl From<WeatherPayload> for WeatherSnapshot {
    fn from(p: WeatherPayload) -> Self {
        Self {
            city: p.city,
            description: p.description,
            icon: p.icon.filter(|i| !i.is_empty()),
            temp: p.temp,
            feels_like: p.feels_like.unwrap_or(p.temp),
            daily_low: p.daily_low.unwrap_or(p.temp),
            daily_high: p.daily_high.unwrap_or(p.temp),
            humidity: p.humidity,
            pressure: p.pressure,
            wind_speed: p.wind_speed,
            sunrise: p.sunrise,
            sunset: p.sunset,
            map_url: p.map_url.filter(|u| !u.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    forecast: Vec<ForecastEntry>,
}

/// Client for the weather backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Arc<Client>,
    base_url: String,
}

impl WeatherClient {
    /// Every request is bounded by `timeout`; a hung backend surfaces as a
    /// network error instead of leaving the caller waiting forever.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search place candidates for a partial name.
    #[instrument(skip(self), level = "debug")]
    pub async fn search_places(&self, query: &str) -> Result<SuggestionList, WeatherError> {
        let url = format!("{}{}", self.base_url, AUTOCOMPLETE_PATH);
        let response = self.client.get(&url).query(&[("q", query)]).send().await?;
        let body = read_body(response).await?;
        decode_suggestions(body)
    }

    /// Fetch current conditions and the forecast together.
    ///
    /// Both requests run concurrently and both are awaited; the result is
    /// all-or-nothing. When both legs fail the current-conditions error is
    /// reported.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_weather(&self, query: &LocationQuery) -> Result<WeatherBundle, WeatherError> {
        let (weather, forecast) =
            tokio::join!(self.fetch_current(query), self.fetch_forecast(query));

        match (weather, forecast) {
            (Ok(weather), Ok(forecast)) => {
                tracing::info!(
                    "Fetched weather for {} with {} forecast days",
                    weather.city,
                    forecast.len()
                );
                Ok(WeatherBundle { weather, forecast })
            }
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }

    async fn fetch_current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, WeatherError> {
        let payload: WeatherPayload = self.post(WEATHER_PATH, query).await?;
        Ok(payload.into())
    }

    async fn fetch_forecast(&self, query: &LocationQuery) -> Result<Vec<ForecastEntry>, WeatherError> {
        let payload: ForecastPayload = self.post(FORECAST_PATH, query).await?;
        Ok(payload.forecast)
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &LocationQuery,
    ) -> Result<T, WeatherError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(query).send().await?;
        let body = read_body(response).await?;
        serde_json::from_value(body).map_err(|e| WeatherError::Parse(format!("{}: {}", path, e)))
    }
}

/// Apply the shared response policy: non-2xx is an HTTP error carrying the
/// server's `error` message when present, and a 2xx body with an `error`
/// field is a service error.
async fn read_body(response: Response) -> Result<Value, WeatherError> {
    let status = response.status();
    let text = response.text().await?;
    let body: Option<Value> = serde_json::from_str(&text).ok();
    let server_error = body.as_ref().and_then(embedded_error);

    if !status.is_success() {
        tracing::debug!("Request failed with status {}", status);
        return Err(WeatherError::Http {
            status: status.as_u16(),
            message: server_error.unwrap_or_else(|| format!("Request failed: HTTP {}", status)),
        });
    }

    if let Some(message) = server_error {
        return Err(WeatherError::Service(message));
    }

    body.ok_or_else(|| WeatherError::Parse("Response body is not valid JSON".to_string()))
}

fn embedded_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
