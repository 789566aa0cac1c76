use super::types::{DEFAULT_K_FACTOR, EloUpdate, RatingValue};

/// Probability that a player rated `rating` beats one rated `opponent`.
pub fn expected_score(rating: RatingValue, opponent: RatingValue) -> f64 {
    1.0 / (1.0 + 10f64.powf(f64::from(opponent - rating) / 400.0))
}

pub fn compute_elo_update(winner_rating: RatingValue, loser_rating: RatingValue) -> EloUpdate {
    compute_elo_update_with_k(winner_rating, loser_rating, DEFAULT_K_FACTOR)
}

pub fn compute_elo_update_with_k(
    winner_rating: RatingValue,
    loser_rating: RatingValue,
    k_factor: f64,
) -> EloUpdate {
    let expected_winner = expected_score(winner_rating, loser_rating);
    let expected_loser = expected_score(loser_rating, winner_rating);

    EloUpdate {
        new_winner_rating: round_half_up(f64::from(winner_rating) + k_factor * (1.0 - expected_winner)),
        new_loser_rating: round_half_up(f64::from(loser_rating) + k_factor * (0.0 - expected_loser)),
    }
}

/// Rounds .5 towards positive infinity, also for negative values.
pub fn round_half_up(value: f64) -> RatingValue {
    (value + 0.5).floor() as RatingValue
}
