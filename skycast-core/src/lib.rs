//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Weather backends (live open-meteo, offline fixture) behind one trait
//! - The city lookup service and shared domain models
//! - Display formatting helpers and the search state container
//! - Configuration and saved-city persistence
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or
//! services that need city weather lookups.

pub mod backend;
pub mod config;
pub mod error;
pub mod format;
pub mod geolocate;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod store;

pub use backend::{FixtureBackend, OpenMeteoBackend, WeatherBackend, backend_from_config};
pub use config::{Config, DEFAULT_CITY};
pub use error::WeatherError;
pub use model::{CurrentConditions, DailyForecast, ForecastDay, Location, WeatherData};
pub use service::WeatherService;
pub use state::{AppState, Outcome, SearchToken};
pub use store::LastCityStore;
