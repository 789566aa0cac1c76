pub mod league;
pub mod selection;

pub use league::LeagueService;
pub use selection::{PlayerSelection, stash_selection, take_selection};
