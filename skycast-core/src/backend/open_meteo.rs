use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{ForecastPayload, WeatherBackend};
use crate::{error::WeatherError, model::Location};

const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1";
const FORECAST_BASE: &str = "https://api.open-meteo.com/v1";
const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,\
wind_speed_10m,wind_direction_10m,pressure_msl,cloud_cover,precipitation,weather_code,is_day";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weather_code,sunrise,sunset,\
rain_sum,uv_index_max,precipitation_probability_max";

/// Live backend over the open-meteo geocoding and forecast APIs.
///
/// Both services are keyless; a search is two sequential GETs
/// (`/search` then `/forecast`) with no retries.
#[derive(Debug, Clone)]
pub struct OpenMeteoBackend {
    http: Client,
    geocoding_base: String,
    forecast_base: String,
}

impl OpenMeteoBackend {
    pub fn new() -> Result<Self, WeatherError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            geocoding_base: GEOCODING_BASE.to_string(),
            forecast_base: FORECAST_BASE.to_string(),
        })
    }

    /// Point both endpoints at custom hosts. Integration tests use this to
    /// target a local mock server.
    pub fn with_endpoints(
        geocoding_base: impl Into<String>,
        forecast_base: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let mut backend = Self::new()?;
        backend.geocoding_base = geocoding_base.into();
        backend.forecast_base = forecast_base.into();
        Ok(backend)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| WeatherError::Payload(err.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: String,
    country: Option<String>,
}

#[async_trait]
impl WeatherBackend for OpenMeteoBackend {
    async fn geocode(&self, city: &str) -> Result<Location, WeatherError> {
        let url = format!("{}/search", self.geocoding_base);

        let parsed: GeocodingResponse = self
            .get_json(
                &url,
                &[
                    ("name", city.to_string()),
                    ("count", "1".to_string()),
                    ("language", "en".to_string()),
                    ("format", "json".to_string()),
                ],
            )
            .await?;

        let hit = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound { city: city.to_string() })?;

        tracing::debug!(city, latitude = hit.latitude, longitude = hit.longitude, "geocoded");

        Ok(Location {
            latitude: hit.latitude,
            longitude: hit.longitude,
            name: hit.name,
            country: hit.country,
        })
    }

    async fn forecast(&self, location: &Location) -> Result<ForecastPayload, WeatherError> {
        let url = format!("{}/forecast", self.forecast_base);

        self.get_json(
            &url,
            &[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ],
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
