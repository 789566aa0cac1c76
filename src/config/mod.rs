pub mod settings;

pub use settings::{AppConfig, RatingSettings, StorageBackend, StorageSettings};
