use std::collections::HashSet;

use log::debug;

use crate::domain::{Match, Player, Side};
use crate::errors::LedgerError;

/// Renames a player in the roster and in every match that lists them.
/// Returns how many matches were touched. Renaming an existing player to the
/// same name is a no-op.
pub fn rename_player(
    players: &mut [Player],
    matches: &mut [Match],
    old_name: &str,
    new_name: &str,
) -> Result<usize, LedgerError> {
    let Some(position) = players.iter().position(|p| p.name == old_name) else {
        return Err(LedgerError::PlayerNotFound {
            name: old_name.to_string(),
        });
    };
    if old_name == new_name {
        return Ok(0);
    }
    if players.iter().any(|p| p.name == new_name) {
        return Err(LedgerError::DuplicatePlayer {
            name: new_name.to_string(),
        });
    }
    players[position].name = new_name.to_string();

    let mut touched = 0;
    for record in matches.iter_mut() {
        let mut renamed = false;
        for side in Side::ALL {
            for name in record.players.get_mut(side).iter_mut().filter(|n| n.as_str() == old_name) {
                *name = new_name.to_string();
                renamed = true;
            }
        }
        touched += usize::from(renamed);
    }

    debug!("Renamed {} to {} in {} matches", old_name, new_name, touched);
    Ok(touched)
}

/// Players that can still be put into the lineup: active ones first, then
/// retired ones when asked for. Each group is sorted by name.
pub fn available_players(players: &[Player], used: &[String], include_retired: bool) -> Vec<Player> {
    let used: HashSet<&str> = used.iter().map(String::as_str).collect();
    let free = |retired: bool| {
        let mut group: Vec<Player> = players
            .iter()
            .filter(|p| p.is_retired == retired && !used.contains(p.name.as_str()))
            .cloned()
            .collect();
        group.sort_by(|a, b| a.name.cmp(&b.name));
        group
    };

    let mut available = free(false);
    if include_retired {
        available.extend(free(true));
    }
    available
}
