use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// A geographic location resolved from a city search.
///
/// Produced once per search by geocoding and never mutated; a new search
/// supersedes the previous location entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: Option<String>,
}

/// Current conditions as reported by the forecast endpoint.
///
/// Field names match the upstream response verbatim; values are kept raw and
/// only converted to strings by the `format` module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
    pub pressure_msl: f64,
    pub cloud_cover: f64,
    pub precipitation: f64,
    pub weather_code: i32,
    pub is_day: u8,
}

impl CurrentConditions {
    pub fn is_daytime(&self) -> bool {
        self.is_day != 0
    }
}

/// Daily forecast as parallel arrays indexed by day offset.
///
/// Invariant: all arrays share identical length and index alignment. The
/// upstream API guarantees this; [`DailyForecast::validate`] enforces it after
/// deserialization so a malformed payload surfaces as an error, not a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weather_code: Vec<i32>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
    pub rain_sum: Vec<f64>,
    pub uv_index_max: Vec<f64>,
    pub precipitation_probability_max: Vec<f64>,
}

impl DailyForecast {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Check the parallel-array alignment invariant.
    pub fn validate(&self) -> Result<(), WeatherError> {
        let n = self.time.len();
        let aligned = [
            self.temperature_2m_max.len(),
            self.temperature_2m_min.len(),
            self.weather_code.len(),
            self.sunrise.len(),
            self.sunset.len(),
            self.rain_sum.len(),
            self.uv_index_max.len(),
            self.precipitation_probability_max.len(),
        ]
        .iter()
        .all(|&len| len == n);

        if aligned {
            Ok(())
        } else {
            Err(WeatherError::Payload(
                "daily forecast arrays are not aligned".to_string(),
            ))
        }
    }

    /// Materialize one aligned day, or `None` if `index` is out of range or
    /// the date/time strings fail to parse.
    pub fn day(&self, index: usize) -> Option<ForecastDay> {
        if index >= self.len() {
            return None;
        }

        Some(ForecastDay {
            date: NaiveDate::parse_from_str(&self.time[index], "%Y-%m-%d").ok()?,
            temperature_max: self.temperature_2m_max[index],
            temperature_min: self.temperature_2m_min[index],
            weather_code: self.weather_code[index],
            sunrise: parse_local_datetime(&self.sunrise[index])?,
            sunset: parse_local_datetime(&self.sunset[index])?,
            rain_sum: self.rain_sum[index],
            uv_index_max: self.uv_index_max[index],
            precipitation_probability_max: self.precipitation_probability_max[index],
        })
    }
}

/// A single forecast day, assembled from the parallel arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub weather_code: i32,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub rain_sum: f64,
    pub uv_index_max: f64,
    pub precipitation_probability_max: f64,
}

/// The merged result of one successful search: forecast payload plus the
/// location metadata from geocoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    pub current: CurrentConditions,
    pub daily: DailyForecast,
    pub location_name: String,
    pub country: Option<String>,
}

// Sunrise/sunset arrive as local ISO 8601, usually without seconds.
fn parse_local_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
