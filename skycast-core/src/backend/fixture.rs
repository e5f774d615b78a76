//! Offline backend serving embedded fixture data.
//!
//! Selected by the explicit `offline` config flag. Responses carry a small
//! artificial delay so callers still exercise their async paths.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{ForecastPayload, WeatherBackend};
use crate::{error::WeatherError, model::Location};

const FIXTURE_JSON: &str = include_str!("fixture_data.json");
const ARTIFICIAL_DELAY: Duration = Duration::from_millis(120);

#[derive(Debug, Deserialize)]
struct FixtureDocument {
    locations: Vec<FixtureLocation>,
    forecast: ForecastPayload,
}

#[derive(Debug, Deserialize)]
struct FixtureLocation {
    name: String,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug)]
pub struct FixtureBackend {
    document: FixtureDocument,
    delay: Duration,
}

impl FixtureBackend {
    pub fn new() -> Result<Self, WeatherError> {
        let document: FixtureDocument = serde_json::from_str(FIXTURE_JSON)
            .map_err(|err| WeatherError::Payload(format!("embedded fixture: {err}")))?;

        Ok(Self { document, delay: ARTIFICIAL_DELAY })
    }

    /// Override the artificial delay (tests use zero).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl WeatherBackend for FixtureBackend {
    /// Case-insensitive lookup in the fixture's location table. A city that
    /// is not listed fails with `LocationNotFound` — it does not fall back
    /// to a default location.
    async fn geocode(&self, city: &str) -> Result<Location, WeatherError> {
        tokio::time::sleep(self.delay).await;

        let hit = self
            .document
            .locations
            .iter()
            .find(|location| location.name.eq_ignore_ascii_case(city))
            .ok_or_else(|| WeatherError::LocationNotFound { city: city.to_string() })?;

        Ok(Location {
            latitude: hit.latitude,
            longitude: hit.longitude,
            name: hit.name.clone(),
            country: hit.country.clone(),
        })
    }

    async fn forecast(&self, _location: &Location) -> Result<ForecastPayload, WeatherError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.document.forecast.clone())
    }
}
