use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::StorageBackend;
use crate::domain::{MatchType, SetScore, Side};

#[derive(Parser, Debug)]
#[command(author, version, about = "Table tennis league ledger with Elo ratings")]
pub struct Cli {
    /// Store location: SQLite file, or directory for the files backend
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Storage backend (defaults to PINGPONG_BACKEND, then sqlite)
    #[arg(long, global = true, value_enum)]
    pub backend: Option<StorageBackend>,

    /// Print views as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Show players ordered by rating
    Ranking {
        /// Include retired players
        #[arg(long)]
        retired: bool,
    },
    /// List all matches, newest first
    Matches,
    /// Show retired players ordered by their best rating
    HallOfFame,
    /// Show one player's record, rating history and matches
    Player { name: String },
    /// Add a player to the roster
    AddPlayer { first: String, last: String },
    /// Pick a player for a lineup slot of the next add-match
    Select {
        name: String,
        /// team1 or team2
        #[arg(long)]
        team: Side,
        /// Slot within the team, 0 or 1
        #[arg(long, default_value_t = 0)]
        slot: usize,
    },
    /// Record a match and update ratings
    AddMatch {
        /// singles or doubles
        #[arg(long = "type", default_value = "singles")]
        match_type: MatchType,
        /// Team 1 player(s)
        #[arg(long, num_args = 1..=2)]
        team1: Vec<String>,
        /// Team 2 player(s)
        #[arg(long, num_args = 1..=2)]
        team2: Vec<String>,
        /// Set score such as 11-9, repeat once per set
        #[arg(long = "set", required = true)]
        sets: Vec<SetScore>,
    },
    /// Delete a match and take back its rating change
    DeleteMatch { id: String },
    /// Rename a player everywhere
    Rename {
        name: String,
        first: String,
        last: String,
    },
    /// Move a player to the hall of fame
    Retire { name: String },
    /// Bring a retired player back to the ranking
    Reactivate { name: String },
    /// Print the house rules
    Rules,
    /// Print shell completions
    Completions { shell: Shell },
}
