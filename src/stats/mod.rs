//! Views derived from the player and match collections. Everything here is a
//! pure function of its inputs and is recomputed per request.

pub mod rankings;
pub mod record;
pub mod roster;
pub mod trajectory;
pub mod views;

pub use rankings::{HallOfFameEntry, RankingEntry, hall_of_fame, rankings};
pub use record::{PlayerRecord, player_record};
pub use roster::{available_players, rename_player};
pub use trajectory::{peak_rating, rating_trajectory};
pub use views::{MatchView, PlayerDetail, PlayerPerspective, match_ledger, player_detail};
