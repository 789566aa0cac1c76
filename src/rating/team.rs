use log::debug;

use super::elo::{compute_elo_update_with_k, round_half_up};
use super::types::RatingValue;
use crate::domain::{Match, MatchRatings, Player, RatingChange, Side, TeamRatings};

/// Rounded mean of the members' ratings. Names missing from the roster
/// count as `default`.
pub fn team_rating(names: &[String], roster: &[Player], default: RatingValue) -> RatingValue {
    if names.is_empty() {
        return default;
    }

    let total: i64 = names
        .iter()
        .map(|name| {
            roster
                .iter()
                .find(|p| &p.name == name)
                .map_or(default, |p| p.rating) as i64
        })
        .sum();

    round_half_up(total as f64 / names.len() as f64)
}

/// Runs the Elo update on the two team ratings and records it from the
/// match's point of view. Losers always get the negated winner delta.
pub fn rate_match(before: TeamRatings, winner: Side, k_factor: f64) -> MatchRatings {
    let loser = winner.opponent();
    let winner_rating = *before.get(winner);
    let update = compute_elo_update_with_k(winner_rating, *before.get(loser), k_factor);

    let mut after = before;
    *after.get_mut(winner) = update.new_winner_rating;
    *after.get_mut(loser) = update.new_loser_rating;

    let delta = update.winner_delta(winner_rating);
    MatchRatings {
        before,
        after,
        change: RatingChange {
            winners: delta,
            losers: -delta,
        },
    }
}

/// Adds the recorded deltas to every member of both sides. Returns how many
/// roster entries changed; matches without ratings are left alone.
pub fn apply_match_ratings(roster: &mut [Player], record: &Match, floor: RatingValue) -> usize {
    let Some(ratings) = record.ratings else {
        return 0;
    };
    shift_ratings(roster, record.winners(), ratings.change.winners, floor)
        + shift_ratings(roster, record.losers(), ratings.change.losers, floor)
}

/// Undoes [`apply_match_ratings`] against the current ratings. Later matches
/// are not replayed, so this is exact only when the match was the last one
/// the players took part in.
pub fn revert_match_ratings(roster: &mut [Player], record: &Match, floor: RatingValue) -> usize {
    let Some(ratings) = record.ratings else {
        return 0;
    };
    shift_ratings(roster, record.winners(), -ratings.change.winners, floor)
        + shift_ratings(roster, record.losers(), -ratings.change.losers, floor)
}

fn shift_ratings(
    roster: &mut [Player],
    names: &[String],
    delta: RatingValue,
    floor: RatingValue,
) -> usize {
    let mut updated = 0;
    for name in names {
        match roster.iter_mut().find(|p| &p.name == name) {
            Some(player) => {
                player.rating = (player.rating + delta).max(floor);
                updated += 1;
            }
            None => debug!("{} is not on the roster, rating left untouched", name),
        }
    }
    updated
}
