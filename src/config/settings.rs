use std::path::PathBuf;

use clap::ValueEnum;

pub const STORE_PATH_ENV: &str = "PINGPONG_STORE";
pub const STORE_BACKEND_ENV: &str = "PINGPONG_BACKEND";

#[derive(Debug, Clone)]
pub struct RatingSettings {
    pub starter_rating: i32,
    pub k_factor: f64,
    pub rating_floor: i32,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            starter_rating: 1500,
            k_factor: 32.0,
            rating_floor: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Single SQLite file
    Sqlite,
    /// Directory with one JSON file per key
    Files,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub path: PathBuf,
    pub backend: StorageBackend,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pingpong_ranking.db"),
            backend: StorageBackend::Sqlite,
        }
    }
}

impl StorageSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let path = std::env::var(STORE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or(defaults.path);
        let backend = std::env::var(STORE_BACKEND_ENV)
            .ok()
            .and_then(|raw| StorageBackend::from_str(&raw, true).ok())
            .unwrap_or(defaults.backend);
        Self { path, backend }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub storage: StorageSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            storage: StorageSettings::from_env(),
        }
    }

    /// Command line flags win over the environment.
    pub fn with_overrides(mut self, path: Option<PathBuf>, backend: Option<StorageBackend>) -> Self {
        if let Some(path) = path {
            self.storage.path = path;
        }
        if let Some(backend) = backend {
            self.storage.backend = backend;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_defaults() {
        let rating = RatingSettings::default();
        assert_eq!(rating.starter_rating, 1500);
        assert_eq!(rating.k_factor, 32.0);
        assert_eq!(rating.rating_floor, 100);
    }

    #[test]
    fn test_overrides_replace_storage() {
        let config = AppConfig::default()
            .with_overrides(Some(PathBuf::from("league")), Some(StorageBackend::Files));

        assert_eq!(config.storage.path, PathBuf::from("league"));
        assert_eq!(config.storage.backend, StorageBackend::Files);

        let untouched = AppConfig::default().with_overrides(None, None);
        assert_eq!(untouched.storage.backend, StorageBackend::Sqlite);
    }
}
