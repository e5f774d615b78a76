use thiserror::Error;

/// Errors produced while looking up weather for a city.
///
/// Only two kinds ever reach the user: "location not found" and "weather
/// fetch failed". [`WeatherError::user_message`] performs that mapping; the
/// finer-grained variants exist for callers and logs.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The city string was blank or geocoding returned zero results.
    #[error("no location found for '{city}'")]
    LocationNotFound { city: String },

    /// The upstream service answered with a non-success status.
    #[error("weather service returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never completed (DNS, connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response decoded but was not usable (bad JSON, misaligned arrays).
    #[error("invalid weather payload: {0}")]
    Payload(String),
}

impl WeatherError {
    /// A message suitable for direct display in an error panel.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::LocationNotFound { .. } => {
                "City not found. Check the city name and try again."
            }
            WeatherError::Api { .. } | WeatherError::Network(_) | WeatherError::Payload(_) => {
                "Could not fetch the weather right now. Please try again."
            }
        }
    }
}
