//! Offline (fixture) mode behavior: deterministic lookups with no network,
//! strict not-found semantics, saved-city round trips, and the
//! last-request-wins guard driven end to end.

use std::time::Duration;

use skycast_core::{
    AppState, Config, FixtureBackend, LastCityStore, Outcome, WeatherError, WeatherService,
    startup::resolve_startup_city,
};

fn offline_service() -> WeatherService {
    let backend = FixtureBackend::new()
        .expect("embedded fixture parses")
        .with_delay(Duration::ZERO);
    WeatherService::new(Box::new(backend))
}

#[tokio::test]
async fn fixture_lookup_is_deterministic() {
    let service = offline_service();

    let data = service.weather_by_city("London").await.expect("fixture lookup");

    assert_eq!(data.location_name, "London");
    assert_eq!(data.daily.len(), 7);
    assert_eq!(data.current.weather_code, 2);
}

#[tokio::test]
async fn unknown_city_is_rejected_not_defaulted() {
    let service = offline_service();

    // Must fail loudly instead of silently answering with another city's data.
    let err = service.weather_by_city("InvalidCity123").await.unwrap_err();
    assert!(matches!(err, WeatherError::LocationNotFound { .. }));
}

#[tokio::test]
async fn saved_city_round_trip_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let store = LastCityStore::at(dir.path().join("last_city"));
    let config = Config { offline: true, ..Config::default() };

    // First run: search succeeds and the city is persisted.
    let service = offline_service();
    let data = service.weather_by_city("Tokyo").await.expect("fixture lookup");
    store.save(&data.location_name).unwrap();

    // "Restart": a fresh store over the same path restores the city as the
    // initial search value, and the lookup still needs no network.
    let restored = LastCityStore::at(dir.path().join("last_city"));
    let startup_city = resolve_startup_city(&restored, &config).await;
    assert_eq!(startup_city, "Tokyo");

    let data = service.weather_by_city(&startup_city).await.expect("fixture lookup");
    assert_eq!(data.location_name, "Tokyo");
}

#[tokio::test]
async fn superseding_search_wins_even_if_it_resolves_first() {
    let service = offline_service();
    let mut state = AppState::new();

    // Tokyo is searched first, then superseded by London while "pending".
    let tokyo_token = state.begin_search();
    let tokyo_result = service.weather_by_city("Tokyo").await;

    let london_token = state.begin_search();
    let london_result = service.weather_by_city("London").await;

    // London resolves and is applied; Tokyo's response arrives afterwards
    // and must be discarded.
    assert_eq!(state.finish_search(london_token, london_result), Outcome::Applied);
    assert_eq!(state.finish_search(tokyo_token, tokyo_result), Outcome::Stale);

    assert_eq!(state.weather().unwrap().location_name, "London");
}

#[tokio::test]
async fn search_error_keeps_last_good_data_visible() {
    let service = offline_service();
    let mut state = AppState::new();

    let token = state.begin_search();
    let result = service.weather_by_city("Paris").await;
    assert_eq!(state.finish_search(token, result), Outcome::Applied);

    let token = state.begin_search();
    let result = service.weather_by_city("InvalidCity123").await;
    assert_eq!(state.finish_search(token, result), Outcome::Applied);

    assert!(state.error().unwrap().contains("Check the city name"));
    assert_eq!(state.weather().unwrap().location_name, "Paris");
}
