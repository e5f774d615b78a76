//! Search state container: loading lifecycle, stale-response guard, and the
//! forecast-day toggle.
//!
//! One `AppState` is the single owner of UI-facing state. It is mutated
//! sequentially by whatever event loop drives it; there is no locking and no
//! cancellation of in-flight requests. The only ordering guarantee is
//! last-request-wins: a response belonging to a superseded search is
//! discarded, never applied.

use crate::{error::WeatherError, model::WeatherData};

/// Identifies one search request. Issued by [`AppState::begin_search`];
/// a response is applied only if its token is still the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchToken(u64);

/// What [`AppState::finish_search`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response belonged to the latest search and was applied.
    Applied,
    /// A newer search superseded this one; the response was discarded.
    Stale,
}

/// UI-facing application state for the weather view.
#[derive(Debug, Default)]
pub struct AppState {
    weather: Option<WeatherData>,
    error: Option<String>,
    loading: bool,
    active_forecast_index: Option<usize>,
    latest_request: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state and issue a token for the new search.
    /// Clears any prior error; previously loaded weather stays visible.
    pub fn begin_search(&mut self) -> SearchToken {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        SearchToken(self.latest_request)
    }

    /// Apply a search result, unless a newer search has superseded it.
    ///
    /// On success the new data replaces the old and the forecast collapses.
    /// On failure the error message is stored and previously displayed
    /// weather data is retained alongside it.
    pub fn finish_search(
        &mut self,
        token: SearchToken,
        result: Result<WeatherData, WeatherError>,
    ) -> Outcome {
        if token.0 != self.latest_request {
            tracing::debug!(request = token.0, latest = self.latest_request, "dropping stale response");
            return Outcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.weather = Some(data);
                self.error = None;
                self.active_forecast_index = None;
            }
            Err(err) => {
                self.error = Some(err.user_message().to_string());
            }
        }

        Outcome::Applied
    }

    /// Expand forecast day `index`, or collapse it if it is already the
    /// active day. At most one day is expanded at a time. Ignored when no
    /// weather is loaded or the index is out of range.
    pub fn toggle_forecast_day(&mut self, index: usize) {
        let Some(weather) = &self.weather else {
            return;
        };
        if index >= weather.daily.len() {
            return;
        }

        self.active_forecast_index = if self.active_forecast_index == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn weather(&self) -> Option<&WeatherData> {
        self.weather.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_forecast_index(&self) -> Option<usize> {
        self.active_forecast_index
    }
}
