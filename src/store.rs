//! Persistence port for user settings and favorites.
//!
//! The UI persists a handful of values across sessions (theme, measurement
//! system, dislikes, favorite recipes, household composition). Rather than
//! reaching into ambient global storage, persistence is an injected
//! key-value port so the request core stays free of I/O side effects and
//! the typed accessors are testable against an in-memory store.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{Household, MeasurementSystem, Recipe};

pub const THEME_KEY: &str = "culinaryCompanionTheme";
pub const MEASUREMENT_KEY: &str = "culinaryCompanionMeasurement";
pub const DISLIKES_KEY: &str = "culinaryCompanionDislikes";
pub const FAVORITES_KEY: &str = "culinaryCompanionFavorites";
pub const HOUSEHOLD_KEY: &str = "culinaryCompanionHousehold";

/// Colour theme selection persisted for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Minimal key-value persistence port. Values are JSON-serialized strings;
/// there is no schema versioning.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store, used in tests and as a no-persistence fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// File-backed store holding a single flat JSON object.
///
/// Every `set` rewrites the file; the data is a few short strings, so
/// this stays cheap.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`, creating an empty one if the file does not
    /// exist. An unreadable or corrupt file is discarded and replaced on
    /// the next write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_else(|| {
                if path.exists() {
                    warn!("Discarding unreadable store file {}", path.display());
                }
                HashMap::new()
            });
        JsonFileStore { path, values }
    }

    fn flush(&self) {
        match serde_json::to_string_pretty(&self.values) {
            Ok(contents) => {
                if let Err(e) = fs::write(&self.path, contents) {
                    warn!("Failed to write store file {}: {}", self.path.display(), e);
                }
            }
            Err(e) => warn!("Failed to serialize store: {}", e),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
        self.flush();
    }
}

/// Typed accessors over the persisted keys.
///
/// A stored value that fails to deserialize is removed and replaced by the
/// default, matching the original behavior of clearing corrupt entries
/// instead of failing.
pub struct Settings<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Settings<S> {
    pub fn new(store: S) -> Self {
        Settings { store }
    }

    fn read_or_default<T: Default + for<'de> Deserialize<'de>>(&mut self, key: &str) -> T {
        match self.store.get(key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Discarding corrupt value for {}: {}", key, e);
                    self.store.remove(key);
                    T::default()
                }
            },
            None => T::default(),
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.set(key, raw),
            Err(e) => warn!("Failed to serialize value for {}: {}", key, e),
        }
    }

    pub fn theme(&mut self) -> Theme {
        self.read_or_default(THEME_KEY)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.write(THEME_KEY, &theme);
    }

    pub fn measurement_system(&mut self) -> MeasurementSystem {
        self.read_or_default(MEASUREMENT_KEY)
    }

    pub fn set_measurement_system(&mut self, system: MeasurementSystem) {
        self.write(MEASUREMENT_KEY, &system);
    }

    pub fn dislikes(&mut self) -> String {
        self.read_or_default(DISLIKES_KEY)
    }

    pub fn set_dislikes(&mut self, dislikes: &str) {
        self.write(DISLIKES_KEY, &dislikes);
    }

    pub fn favorites(&mut self) -> Vec<Recipe> {
        self.read_or_default(FAVORITES_KEY)
    }

    pub fn set_favorites(&mut self, favorites: &[Recipe]) {
        self.write(FAVORITES_KEY, &favorites);
    }

    pub fn household(&mut self) -> Household {
        self.read_or_default(HOUSEHOLD_KEY)
    }

    pub fn set_household(&mut self, household: Household) {
        self.write(HOUSEHOLD_KEY, &household);
    }
}
