use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde_json::Value;

use super::selection::{self, PlayerSelection};
use crate::config::RatingSettings;
use crate::domain::draft::SLOTS_PER_SIDE;
use crate::domain::{Match, MatchDraft, Player, Side, TeamRatings, Teams, migrate_matches, tally_sets};
use crate::errors::LedgerError;
use crate::rating::{apply_match_ratings, rate_match, revert_match_ratings, team_rating};
use crate::stats::{self, HallOfFameEntry, MatchView, PlayerDetail, RankingEntry};
use crate::storage::{self, KeyValueStore, MATCHES_KEY, PLAYERS_KEY};
use crate::validation::{MatchViolation, validate_full_name};

/// Reads and writes the league through a key-value store. Every call loads
/// fresh collections; writes replace them whole once all checks passed.
pub struct LeagueService<S: KeyValueStore> {
    store: S,
    settings: RatingSettings,
}

impl<S: KeyValueStore> LeagueService<S> {
    pub fn new(store: S, settings: RatingSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_players(&self) -> Result<Vec<Player>> {
        Ok(storage::load_json(&self.store, PLAYERS_KEY)?.unwrap_or_default())
    }

    pub fn load_matches(&self) -> Result<Vec<Match>> {
        let stored: Vec<Value> = storage::load_json(&self.store, MATCHES_KEY)?.unwrap_or_default();
        Ok(migrate_matches(stored))
    }

    pub fn rankings(&self, include_retired: bool) -> Result<Vec<RankingEntry>> {
        Ok(stats::rankings(&self.load_players()?, &self.load_matches()?, include_retired))
    }

    pub fn hall_of_fame(&self) -> Result<Vec<HallOfFameEntry>> {
        Ok(stats::hall_of_fame(
            &self.load_players()?,
            &self.load_matches()?,
            self.settings.starter_rating,
        ))
    }

    pub fn match_ledger(&self) -> Result<Vec<MatchView>> {
        Ok(stats::match_ledger(&self.load_matches()?))
    }

    pub fn player_detail(&self, name: &str) -> Result<Option<PlayerDetail>> {
        Ok(stats::player_detail(
            name,
            &self.load_players()?,
            &self.load_matches()?,
            self.settings.starter_rating,
        ))
    }

    pub fn available_players(&self, used: &[String], include_retired: bool) -> Result<Vec<Player>> {
        Ok(stats::available_players(&self.load_players()?, used, include_retired))
    }

    pub fn add_player(&self, first: &str, last: &str) -> Result<Player> {
        let name = validate_full_name(first, last).map_err(LedgerError::from)?;
        let mut players = self.load_players()?;

        let lowered = name.to_lowercase();
        if players.iter().any(|p| p.name.to_lowercase() == lowered) {
            return Err(LedgerError::DuplicatePlayer { name }.into());
        }

        let player = Player::new(name, self.settings.starter_rating);
        players.push(player.clone());
        players.sort_by(|a, b| a.name.cmp(&b.name));

        storage::save_json(&self.store, PLAYERS_KEY, &players)?;
        info!("Added player {} at {}", player.name, player.rating);
        Ok(player)
    }

    pub fn record_match(&self, draft: &MatchDraft) -> Result<Match> {
        self.record_match_at(draft, Utc::now())
    }

    /// Validates the draft, rates it and stores it together with the updated
    /// player ratings.
    pub fn record_match_at(&self, draft: &MatchDraft, now: DateTime<Utc>) -> Result<Match> {
        draft.validate().map_err(LedgerError::from)?;

        let mut players = self.load_players()?;
        let mut matches = self.load_matches()?;

        let teams = Teams::new(draft.team_names(Side::Team1), draft.team_names(Side::Team2));
        for name in teams.team1.iter().chain(&teams.team2) {
            if !players.iter().any(|p| &p.name == name) {
                return Err(LedgerError::PlayerNotFound { name: name.clone() }.into());
            }
        }

        let score = tally_sets(&draft.sets);
        let winner = score
            .leader()
            .ok_or(LedgerError::InvalidMatch(MatchViolation::NoClearWinner))?;

        let starter = self.settings.starter_rating;
        let before = TeamRatings::new(
            team_rating(&teams.team1, &players, starter),
            team_rating(&teams.team2, &players, starter),
        );
        let ratings = rate_match(before, winner, self.settings.k_factor);

        let record = Match {
            id: next_match_id(&matches, now),
            match_type: draft.match_type,
            players: teams,
            sets: draft.sets.clone(),
            score,
            date: now,
            winner,
            ratings: Some(ratings),
        };

        let updated = apply_match_ratings(&mut players, &record, self.settings.rating_floor);
        debug!("Match {} moved {} player ratings", record.id, updated);
        matches.push(record.clone());

        self.save_all(&players, &matches)?;
        info!(
            "Recorded {} match {}: {} defeated {} ({:+})",
            record.match_type,
            record.id,
            record.winners().join(" & "),
            record.losers().join(" & "),
            ratings.change.winners
        );
        Ok(record)
    }

    /// Removes a match and takes its rating change back off the players.
    /// An unknown id changes nothing.
    pub fn delete_match(&self, id: &str) -> Result<Option<Match>> {
        let mut matches = self.load_matches()?;
        let Some(position) = matches.iter().position(|m| m.id == id) else {
            warn!("No match with id {}, nothing deleted", id);
            return Ok(None);
        };

        let mut players = self.load_players()?;
        let removed = matches.remove(position);
        revert_match_ratings(&mut players, &removed, self.settings.rating_floor);

        self.save_all(&players, &matches)?;
        info!("Deleted match {}", removed.id);
        Ok(Some(removed))
    }

    /// Returns the new full name.
    pub fn rename_player(&self, old_name: &str, first: &str, last: &str) -> Result<String> {
        let new_name = validate_full_name(first, last).map_err(LedgerError::from)?;
        let mut players = self.load_players()?;
        let mut matches = self.load_matches()?;

        let touched = stats::rename_player(&mut players, &mut matches, old_name, &new_name)?;
        if old_name == new_name {
            return Ok(new_name);
        }

        self.save_all(&players, &matches)?;
        info!("Renamed {} to {} ({} matches)", old_name, new_name, touched);
        Ok(new_name)
    }

    /// Unknown names change nothing.
    pub fn set_retired(&self, name: &str, retired: bool) -> Result<Option<Player>> {
        let mut players = self.load_players()?;
        let Some(player) = players.iter_mut().find(|p| p.name == name) else {
            warn!("No player named {}, retirement unchanged", name);
            return Ok(None);
        };
        player.is_retired = retired;
        let updated = player.clone();

        storage::save_json(&self.store, PLAYERS_KEY, &players)?;
        info!("{} is now {}", name, if retired { "retired" } else { "active" });
        Ok(Some(updated))
    }

    /// Parks a player for a lineup slot of the next match entry.
    pub fn stash_selection(&self, name: &str, team: Side, slot: usize) -> Result<PlayerSelection> {
        if slot >= SLOTS_PER_SIDE {
            bail!("Slot must be below {}, got {}", SLOTS_PER_SIDE, slot);
        }
        if !self.load_players()?.iter().any(|p| p.name == name) {
            return Err(LedgerError::PlayerNotFound { name: name.to_string() }.into());
        }

        let selection = PlayerSelection::new(name, team, slot);
        selection::stash_selection(&self.store, &selection)?;
        Ok(selection)
    }

    /// Moves a stashed selection into the draft. Returns whether one was applied.
    pub fn apply_pending_selection(&self, draft: &mut MatchDraft) -> Result<bool> {
        let Some(selection) = selection::take_selection(&self.store)? else {
            return Ok(false);
        };

        let applied = draft.assign(selection.team, selection.index, selection.player_name.clone());
        if applied {
            debug!(
                "Placed {} in {} slot {}",
                selection.player_name, selection.team, selection.index
            );
        } else {
            warn!("Ignoring selection for missing slot {}", selection.index);
        }
        Ok(applied)
    }

    fn save_all(&self, players: &[Player], matches: &[Match]) -> Result<()> {
        self.store.set_many(&[
            (PLAYERS_KEY, storage::to_json(PLAYERS_KEY, players)?),
            (MATCHES_KEY, storage::to_json(MATCHES_KEY, matches)?),
        ])
    }
}

/// Creation time in milliseconds, moved forward until no stored match uses it.
fn next_match_id(matches: &[Match], now: DateTime<Utc>) -> String {
    let mut millis = now.timestamp_millis();
    while matches.iter().any(|m| m.id == millis.to_string()) {
        millis += 1;
    }
    millis.to_string()
}
