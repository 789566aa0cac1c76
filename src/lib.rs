pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod report;
pub mod services;
pub mod stats;
pub mod storage;
pub mod validation;

use std::io;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::{MatchDraft, MatchType, SetScore, Side};
use crate::errors::LedgerError;
use crate::services::LeagueService;
use crate::storage::KeyValueStore;

pub type League = LeagueService<Box<dyn KeyValueStore>>;

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Environment first, then command line flags on top.
pub fn load_config(cli: &Cli) -> AppConfig {
    AppConfig::new().with_overrides(cli.store.clone(), cli.backend)
}

pub fn open_service(config: &AppConfig) -> Result<League> {
    let store = storage::open_store(&config.storage)?;
    Ok(LeagueService::new(store, config.rating.clone()))
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    let out = if json { report::render_json(value)? } else { text(value) };
    println!("{}", out.trim_end());
    Ok(())
}

pub fn handle_ranking(league: &League, include_retired: bool, json: bool) -> Result<()> {
    let entries = league.rankings(include_retired)?;
    emit(json, entries.as_slice(), report::render_rankings)
}

pub fn handle_matches(league: &League, json: bool) -> Result<()> {
    let views = league.match_ledger()?;
    emit(json, views.as_slice(), report::render_ledger)
}

pub fn handle_hall_of_fame(league: &League, json: bool) -> Result<()> {
    let entries = league.hall_of_fame()?;
    emit(json, entries.as_slice(), report::render_hall_of_fame)
}

pub fn handle_player(league: &League, name: &str, json: bool) -> Result<()> {
    let detail = league
        .player_detail(name)?
        .ok_or_else(|| LedgerError::PlayerNotFound { name: name.to_string() })?;
    emit(json, &detail, report::render_player_detail)
}

pub fn handle_add_player(league: &League, first: &str, last: &str, json: bool) -> Result<()> {
    let player = league.add_player(first, last)?;
    emit(json, &player, |p| format!("Added {} with rating {}", p.name, p.rating))
}

pub fn handle_select(league: &League, name: &str, team: Side, slot: usize, json: bool) -> Result<()> {
    let selection = league.stash_selection(name, team, slot)?;
    emit(json, &selection, |s| {
        format!(
            "{} will play in {} slot {} of the next match",
            s.player_name, s.team, s.index
        )
    })
}

pub fn handle_add_match(
    league: &League,
    match_type: MatchType,
    team1: &[String],
    team2: &[String],
    sets: &[SetScore],
    json: bool,
) -> Result<()> {
    let draft = build_draft(league, match_type, team1, team2, sets)?;
    let record = league.record_match(&draft)?;
    emit(json, &record, report::render_match_saved)
}

/// A pending `select` takes its slot first; names given on the command line
/// go into the slots still open on their team.
pub fn build_draft<S: KeyValueStore>(
    league: &LeagueService<S>,
    match_type: MatchType,
    team1: &[String],
    team2: &[String],
    sets: &[SetScore],
) -> Result<MatchDraft> {
    let mut draft = MatchDraft::new(match_type);
    league.apply_pending_selection(&mut draft)?;

    for (side, names) in [(Side::Team1, team1), (Side::Team2, team2)] {
        for name in names {
            if !draft.fill_open_slot(side, name) {
                bail!(
                    "No open slot on {} for {}, it already has {}",
                    side,
                    name.trim(),
                    draft.team_names(side).join(" & ")
                );
            }
        }
    }
    draft.sets = sets.to_vec();
    Ok(draft)
}

pub fn handle_delete_match(league: &League, id: &str, json: bool) -> Result<()> {
    let removed = league.delete_match(id)?;
    emit(json, &removed, |removed| match removed {
        Some(record) => format!("Deleted match {}", record.id),
        None => format!("No match with id {}", id),
    })
}

pub fn handle_rename(league: &League, name: &str, first: &str, last: &str, json: bool) -> Result<()> {
    let new_name = league.rename_player(name, first, last)?;
    emit(json, &new_name, |new_name| format!("{} is now {}", name, new_name))
}

pub fn handle_set_retired(league: &League, name: &str, retired: bool, json: bool) -> Result<()> {
    let player = league.set_retired(name, retired)?;
    emit(json, &player, |player| match player {
        Some(p) if p.is_retired => format!("{} moved to the hall of fame", p.name),
        Some(p) => format!("{} is back in the ranking", p.name),
        None => format!("No player named {}", name),
    })
}

pub fn handle_rules() -> Result<()> {
    println!("{}", report::RULES.trim_end());
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
