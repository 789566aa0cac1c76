pub mod elo;
pub mod team;
pub mod types;

pub use elo::{compute_elo_update, compute_elo_update_with_k, expected_score};
pub use team::{apply_match_ratings, rate_match, revert_match_ratings, team_rating};
pub use types::{DEFAULT_K_FACTOR, EloUpdate, RatingValue};
