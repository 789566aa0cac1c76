pub type RatingValue = i32;

pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Ratings of the two sides after one contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EloUpdate {
    pub new_winner_rating: RatingValue,
    pub new_loser_rating: RatingValue,
}

impl EloUpdate {
    pub fn winner_delta(&self, winner_rating: RatingValue) -> RatingValue {
        self.new_winner_rating - winner_rating
    }
}
