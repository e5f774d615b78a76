use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Select, Text};
use skycast_core::{
    AppState, Config, DEFAULT_CITY, LastCityStore, Outcome, WeatherService, backend_from_config,
    format, startup::resolve_startup_city,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current conditions and the 7-day forecast for a city.
    Show {
        /// City name. Falls back to the saved, geolocated, or configured city.
        city: Option<String>,

        /// Expand one forecast day (0-based index).
        #[arg(long)]
        day: Option<usize>,

        /// Serve embedded fixture data instead of calling the network.
        #[arg(long)]
        offline: bool,
    },

    /// Search cities and browse forecast days interactively.
    Interactive {
        /// Serve embedded fixture data instead of calling the network.
        #[arg(long)]
        offline: bool,
    },

    /// Store the default city and offline preference.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { city, day, offline } => run_show(city, day, offline).await,
            Command::Interactive { offline } => run_interactive(offline).await,
            Command::Configure => run_configure(),
        }
    }
}

fn load_config(offline: bool) -> anyhow::Result<Config> {
    let mut config = Config::load().context("Failed to load configuration")?;
    if offline {
        config.offline = true;
    }
    Ok(config)
}

fn persist_city(store: &LastCityStore, city: &str) {
    if let Err(err) = store.save(city) {
        tracing::warn!("Failed to persist last city: {err:#}");
    }
}

async fn run_show(city: Option<String>, day: Option<usize>, offline: bool) -> anyhow::Result<()> {
    let config = load_config(offline)?;
    let store = LastCityStore::open_default()?;

    let city = match city {
        Some(city) => city,
        None => resolve_startup_city(&store, &config).await,
    };

    let service = WeatherService::new(backend_from_config(&config)?);
    match service.weather_by_city(&city).await {
        Ok(data) => {
            persist_city(&store, &data.location_name);
            let today = chrono::Local::now().date_naive();
            println!("{}", render::weather_report(&data, day, today));
            Ok(())
        }
        Err(err) => {
            tracing::debug!("lookup failed: {err}");
            eprintln!("{}", render::error_panel(err.user_message()));
            std::process::exit(1);
        }
    }
}

const SEARCH_AGAIN: &str = "Search another city";
const QUIT: &str = "Quit";

async fn run_interactive(offline: bool) -> anyhow::Result<()> {
    let config = load_config(offline)?;
    let store = LastCityStore::open_default()?;
    let service = WeatherService::new(backend_from_config(&config)?);

    let mut state = AppState::new();
    let mut initial = resolve_startup_city(&store, &config).await;

    loop {
        let city = Text::new("City:").with_initial_value(&initial).prompt()?;

        let token = state.begin_search();
        let result = service.weather_by_city(&city).await;
        let fetched = result.as_ref().ok().map(|data| data.location_name.clone());

        if state.finish_search(token, result) == Outcome::Applied {
            if let Some(name) = fetched {
                persist_city(&store, &name);
                initial = name;
            }
        }

        if let Some(message) = state.error() {
            println!("{}", render::error_panel(message));
        }

        browse_forecast(&mut state)?;

        if state.weather().is_none() && state.error().is_none() {
            // Nothing loaded and nothing to report; prompt again.
            continue;
        }

        let next = Select::new("Next:", vec![SEARCH_AGAIN.to_string(), QUIT.to_string()]).prompt()?;
        if next == QUIT {
            return Ok(());
        }
    }
}

/// Expand/collapse forecast days until the user moves on. At most one day is
/// expanded at a time; selecting the expanded day collapses it.
fn browse_forecast(state: &mut AppState) -> anyhow::Result<()> {
    loop {
        let today = chrono::Local::now().date_naive();

        let day_count = {
            let Some(data) = state.weather() else {
                return Ok(());
            };
            println!("{}", render::weather_report(data, state.active_forecast_index(), today));
            data.daily.len()
        };

        let mut options: Vec<String> = Vec::with_capacity(day_count + 1);
        for index in 0..day_count {
            let label = state
                .weather()
                .and_then(|data| data.daily.day(index))
                .map(|day| format::relative_day(day.date, today))
                .unwrap_or_else(|| format!("Day {index}"));

            if state.active_forecast_index() == Some(index) {
                options.push(format!("Collapse {label}"));
            } else {
                options.push(format!("Expand {label}"));
            }
        }
        options.push("Done".to_string());

        let choice = Select::new("Forecast:", options).raw_prompt()?;
        if choice.index >= day_count {
            return Ok(());
        }
        state.toggle_forecast_day(choice.index);
    }
}

fn run_configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let default_city = Text::new("Default city:")
        .with_initial_value(config.default_city.as_deref().unwrap_or(DEFAULT_CITY))
        .prompt()?;

    let offline = Confirm::new("Use offline fixture data?")
        .with_default(config.offline)
        .prompt()?;

    config.default_city = Some(default_city.trim().to_string());
    config.offline = offline;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
