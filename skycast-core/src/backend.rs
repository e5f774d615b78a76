use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::WeatherError,
    model::{CurrentConditions, DailyForecast, Location},
};

pub mod fixture;
pub mod open_meteo;

pub use fixture::FixtureBackend;
pub use open_meteo::OpenMeteoBackend;

/// Forecast payload for a location, before location metadata is merged in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub current: CurrentConditions,
    pub daily: DailyForecast,
}

/// Source of geocoding and forecast data.
///
/// Two implementations exist: the live open-meteo backend and the embedded
/// fixture backend used for offline/deterministic runs.
#[async_trait]
pub trait WeatherBackend: Send + Sync + Debug {
    /// Resolve a free-text city name to coordinates.
    async fn geocode(&self, city: &str) -> Result<Location, WeatherError>;

    /// Fetch current conditions and the daily forecast for a location.
    async fn forecast(&self, location: &Location) -> Result<ForecastPayload, WeatherError>;
}

/// Construct the backend selected by config: fixture data when offline,
/// live open-meteo otherwise. Mock mode is chosen here, explicitly, and
/// nowhere else.
pub fn backend_from_config(config: &Config) -> Result<Box<dyn WeatherBackend>, WeatherError> {
    let boxed: Box<dyn WeatherBackend> = if config.offline {
        Box::new(FixtureBackend::new()?)
    } else {
        Box::new(OpenMeteoBackend::new()?)
    };

    Ok(boxed)
}
