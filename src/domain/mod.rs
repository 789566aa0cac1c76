pub mod draft;
pub mod migration;
pub mod models;
pub mod timestamp;

pub use draft::{Lineup, MatchDraft};
pub use migration::{StoredMatch, migrate_matches};
pub use models::*;
