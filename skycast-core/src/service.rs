//! City-to-weather orchestration: geocode, fetch, merge.

use crate::{backend::WeatherBackend, error::WeatherError, model::WeatherData};

/// Looks up weather for a city through a single backend.
///
/// Every call is one best-effort attempt: two sequential fetches, no retries,
/// no backoff. Callers surface failures via [`WeatherError::user_message`].
#[derive(Debug)]
pub struct WeatherService {
    backend: Box<dyn WeatherBackend>,
}

impl WeatherService {
    pub fn new(backend: Box<dyn WeatherBackend>) -> Self {
        Self { backend }
    }

    /// Resolve a city to coordinates, fetch its forecast, and merge the
    /// location metadata into the result.
    pub async fn weather_by_city(&self, city: &str) -> Result<WeatherData, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::LocationNotFound { city: city.to_string() });
        }

        let location = self.backend.geocode(city).await?;
        let payload = self.backend.forecast(&location).await?;
        payload.daily.validate()?;

        tracing::info!(city = %location.name, days = payload.daily.len(), "fetched weather");

        Ok(WeatherData {
            current: payload.current,
            daily: payload.daily,
            location_name: location.name,
            country: location.country,
        })
    }
}
