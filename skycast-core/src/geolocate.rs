//! Best-effort IP geolocation for startup city resolution.
//!
//! Returns `None` on any failure or timeout; the caller falls back to the
//! configured default city. Geolocation failure is never user-facing.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

const GEOIP_URL: &str = "http://ip-api.com/json";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    status: String,
    city: Option<String>,
}

/// Approximate the current city from the caller's public IP.
pub async fn current_city() -> Option<String> {
    let client = match Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!("Failed to create geolocation client: {}", err);
            return None;
        }
    };

    let response = match client.get(GEOIP_URL).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!("Geolocation request failed: {}", err);
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!("Geolocation returned status {}", response.status());
        return None;
    }

    let body: GeoIpResponse = match response.json().await {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!("Geolocation parse error: {}", err);
            return None;
        }
    };

    if body.status != "success" {
        return None;
    }

    let city = body.city.filter(|city| !city.is_empty())?;
    tracing::info!("Geolocated to: {}", city);
    Some(city)
}
