//! Initial search value resolution.
//!
//! Order: saved city, then approximate geolocation, then the configured
//! default. Geolocation is skipped entirely in offline mode.

use crate::{
    config::{Config, DEFAULT_CITY},
    geolocate,
    store::LastCityStore,
};

pub async fn resolve_startup_city(store: &LastCityStore, config: &Config) -> String {
    if let Some(city) = store.load() {
        tracing::debug!(%city, "using saved city");
        return city;
    }

    if !config.offline {
        if let Some(city) = geolocate::current_city().await {
            return city;
        }
    }

    config
        .default_city
        .clone()
        .unwrap_or_else(|| DEFAULT_CITY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Offline configs keep these tests off the network.
    fn offline_config() -> Config {
        Config { offline: true, ..Config::default() }
    }

    #[tokio::test]
    async fn saved_city_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = LastCityStore::at(dir.path().join("last_city"));
        store.save("Tokyo").unwrap();

        let city = resolve_startup_city(&store, &offline_config()).await;
        assert_eq!(city, "Tokyo");
    }

    #[tokio::test]
    async fn configured_default_when_nothing_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = LastCityStore::at(dir.path().join("last_city"));

        let config = Config { default_city: Some("Berlin".to_string()), offline: true };
        assert_eq!(resolve_startup_city(&store, &config).await, "Berlin");
    }

    #[tokio::test]
    async fn builtin_fallback_when_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        let store = LastCityStore::at(dir.path().join("last_city"));

        assert_eq!(resolve_startup_city(&store, &offline_config()).await, DEFAULT_CITY);
    }
}
