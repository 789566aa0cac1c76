use std::collections::HashSet;

use thiserror::Error;

use super::sets::{SetViolation, validate_set};
use crate::domain::draft::MAX_SETS;
use crate::domain::{Lineup, MatchType, SetScore, Side, tally_sets};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchViolation {
    #[error("Please select all players")]
    MissingPlayers,
    #[error("{name} cannot play twice in the same match")]
    DuplicatePlayer { name: String },
    #[error("A match must have between 1 and 5 sets, got {count}")]
    SetCount { count: usize },
    #[error("Please enter scores for all sets")]
    EmptySet { set: usize },
    #[error("Set {set}: {violation}")]
    InvalidSet { set: usize, violation: SetViolation },
    #[error("Match must have a clear winner")]
    NoClearWinner,
    #[error("No team has won enough sets to win the match")]
    NotEnoughSets,
}

/// Checks a proposed match before anything is persisted. Set numbers in
/// violations are 1-based.
pub fn validate_match(
    lineup: &Lineup,
    sets: &[SetScore],
    match_type: MatchType,
) -> Result<(), MatchViolation> {
    validate_lineup(lineup, match_type)?;

    if sets.is_empty() || sets.len() > MAX_SETS {
        return Err(MatchViolation::SetCount { count: sets.len() });
    }

    if let Some(idx) = sets.iter().position(SetScore::is_blank) {
        return Err(MatchViolation::EmptySet { set: idx + 1 });
    }

    for (idx, set) in sets.iter().enumerate() {
        validate_set(set.team1, set.team2).map_err(|violation| MatchViolation::InvalidSet {
            set: idx + 1,
            violation,
        })?;
    }

    let tally = tally_sets(sets);
    if tally.leader().is_none() {
        return Err(MatchViolation::NoClearWinner);
    }

    let needed = sets.len().div_ceil(2) as i32;
    if tally.team1.max(tally.team2) < needed {
        return Err(MatchViolation::NotEnoughSets);
    }

    Ok(())
}

fn validate_lineup(lineup: &Lineup, match_type: MatchType) -> Result<(), MatchViolation> {
    let required = match_type.players_per_side();
    let mut seen = HashSet::new();

    for side in Side::ALL {
        for slot in lineup.get(side).iter().take(required) {
            let name = slot
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(MatchViolation::MissingPlayers)?;
            if !seen.insert(name) {
                return Err(MatchViolation::DuplicatePlayer {
                    name: name.to_string(),
                });
            }
        }
    }
    Ok(())
}
