//! Key-value storage for the two league collections.
//!
//! Values are UTF-8 JSON text. A `set` replaces the whole value of a key and
//! every backend makes that replacement atomic per key.

pub mod files;
pub mod memory;
pub mod sqlite;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{StorageBackend, StorageSettings};
use crate::errors::parse_context;

pub use files::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub const PLAYERS_KEY: &str = "players";
pub const MATCHES_KEY: &str = "matches";
pub const SELECTED_PLAYER_KEY: &str = "selectedPlayer";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Writes several keys. Backends that can commit them together override this.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
        (**self).set_many(entries)
    }
}

pub fn open_store(settings: &StorageSettings) -> Result<Box<dyn KeyValueStore>> {
    info!("Opening {:?} store at {}", settings.backend, settings.path.display());
    let store: Box<dyn KeyValueStore> = match settings.backend {
        StorageBackend::Sqlite => Box::new(SqliteStore::open(&settings.path)?),
        StorageBackend::Files => Box::new(FileStore::new(&settings.path)?),
    };
    Ok(store)
}

/// Reads and decodes a key. An absent key is `Ok(None)`.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    let data = serde_json::from_str(&raw).with_context(|| {
        format!(
            "{}. First 200 chars: {}",
            parse_context(key),
            raw.chars().take(200).collect::<String>()
        )
    })?;
    Ok(Some(data))
}

pub fn to_json<T: Serialize + ?Sized>(key: &str, data: &T) -> Result<String> {
    serde_json::to_string(data).with_context(|| format!("Failed to serialize {}", key))
}

pub fn save_json<T, S>(store: &S, key: &str, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    store.set(key, &to_json(key, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Player;

    #[test]
    fn test_json_helpers_roundtrip_through_store() {
        let store = MemoryStore::new();
        let players = vec![Player::new("Ann Lee", 1500)];

        save_json(&store, PLAYERS_KEY, &players).unwrap();
        let loaded: Option<Vec<Player>> = load_json(&store, PLAYERS_KEY).unwrap();

        assert_eq!(loaded, Some(players));
        assert_eq!(load_json::<Vec<Player>, _>(&store, MATCHES_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_json_reports_corrupt_value() {
        let store = MemoryStore::new();
        store.set(PLAYERS_KEY, "[{\"name\": ").unwrap();

        let err = load_json::<Vec<Player>, _>(&store, PLAYERS_KEY).unwrap_err();
        assert!(err.to_string().contains("Failed to parse players"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());

        store
            .set_many(&[(PLAYERS_KEY, "[]".to_string()), (MATCHES_KEY, "[]".to_string())])
            .unwrap();
        store.remove(PLAYERS_KEY).unwrap();

        assert_eq!(store.get(PLAYERS_KEY).unwrap(), None);
        assert_eq!(store.get(MATCHES_KEY).unwrap().as_deref(), Some("[]"));
    }
}
