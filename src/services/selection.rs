use anyhow::Result;
use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::Side;
use crate::storage::{self, KeyValueStore, SELECTED_PLAYER_KEY};

/// A player picked for a lineup slot, waiting for the next match entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSelection {
    pub player_name: String,
    pub team: Side,
    pub index: usize,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl PlayerSelection {
    pub fn new(player_name: impl Into<String>, team: Side, index: usize) -> Self {
        Self {
            player_name: player_name.into(),
            team,
            index,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

pub fn stash_selection<S: KeyValueStore + ?Sized>(store: &S, selection: &PlayerSelection) -> Result<()> {
    debug!(
        "Stashing {} for {} slot {}",
        selection.player_name, selection.team, selection.index
    );
    storage::save_json(store, SELECTED_PLAYER_KEY, selection)
}

/// Reads the pending selection and removes it, so it is handed out once.
/// A payload that cannot be decoded is dropped.
pub fn take_selection<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<PlayerSelection>> {
    let Some(raw) = store.get(SELECTED_PLAYER_KEY)? else {
        return Ok(None);
    };
    store.remove(SELECTED_PLAYER_KEY)?;

    match serde_json::from_str(&raw) {
        Ok(selection) => Ok(Some(selection)),
        Err(e) => {
            warn!("Discarding unreadable player selection: {}", e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_selection_is_taken_once() {
        let store = MemoryStore::new();
        let selection = PlayerSelection::new("Ann Lee", Side::Team2, 1);

        stash_selection(&store, &selection).unwrap();

        assert_eq!(take_selection(&store).unwrap(), Some(selection));
        assert_eq!(take_selection(&store).unwrap(), None);
    }

    #[test]
    fn test_selection_wire_format() {
        let store = MemoryStore::new();
        store
            .set(
                SELECTED_PLAYER_KEY,
                r#"{"playerName":"Bo Chen","team":"team1","index":0,"timestamp":1714588200000}"#,
            )
            .unwrap();

        let selection = take_selection(&store).unwrap().unwrap();
        assert_eq!(selection.player_name, "Bo Chen");
        assert_eq!(selection.team, Side::Team1);
        assert_eq!(selection.timestamp, 1_714_588_200_000);
    }

    #[test]
    fn test_malformed_selection_is_discarded() {
        let store = MemoryStore::new();
        store.set(SELECTED_PLAYER_KEY, "{\"playerName\": 3").unwrap();

        assert_eq!(take_selection(&store).unwrap(), None);
        assert_eq!(store.get(SELECTED_PLAYER_KEY).unwrap(), None);
    }
}
