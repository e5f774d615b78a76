//! Persistence of the last successfully searched city.
//!
//! A single string in a plain file, read at startup and written after each
//! successful search. The web variants of this app kept the same value under
//! one local-storage key; the file plays that role here.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;

const LAST_CITY_FILE: &str = "last_city";

#[derive(Debug, Clone)]
pub struct LastCityStore {
    path: PathBuf,
}

impl LastCityStore {
    /// Store in the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(Self { path: dirs.data_dir().join(LAST_CITY_FILE) })
    }

    /// Store at an explicit path (used by tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The saved city, if any. A missing or unreadable file means "no saved
    /// city" — startup falls back to geolocation or the default.
    pub fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let city = contents.trim();
        if city.is_empty() { None } else { Some(city.to_string()) }
    }

    /// Save a city, creating parent directories as needed.
    pub fn save(&self, city: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }

        fs::write(&self.path, city)
            .with_context(|| format!("Failed to write saved city: {}", self.path.display()))
    }
}
