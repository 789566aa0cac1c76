use thiserror::Error;

pub const POINTS_TO_WIN: i32 = 11;
pub const WIN_MARGIN: i32 = 2;
/// Loser score from which a set can run past 11.
pub const DEUCE_AT: i32 = POINTS_TO_WIN - 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetViolation {
    #[error("Scores cannot be negative")]
    NegativeScore,
    #[error("Winner must score at least 11 points")]
    BelowWinningScore,
    #[error("Must win by at least 2 points")]
    MarginTooSmall,
    #[error("In deuce (10-10+), you must win by exactly 2 points")]
    DeuceMargin,
    #[error("Game should have ended at 11-{loser} (loser had less than 10 points)")]
    Overshoot { loser: i32 },
    #[error("With loser at 10, winner can only score up to 12 (12-10)")]
    DeuceOvershoot,
}

/// Checks that a set score is a finished table-tennis set.
pub fn validate_set(score1: i32, score2: i32) -> Result<(), SetViolation> {
    if score1 < 0 || score2 < 0 {
        return Err(SetViolation::NegativeScore);
    }

    let winner = score1.max(score2);
    let loser = score1.min(score2);

    if winner < POINTS_TO_WIN {
        return Err(SetViolation::BelowWinningScore);
    }
    if winner - loser < WIN_MARGIN {
        return Err(SetViolation::MarginTooSmall);
    }

    if loser >= POINTS_TO_WIN {
        if winner - loser != WIN_MARGIN {
            return Err(SetViolation::DeuceMargin);
        }
    } else if loser < DEUCE_AT && winner > POINTS_TO_WIN {
        return Err(SetViolation::Overshoot { loser });
    } else if loser == DEUCE_AT && winner > POINTS_TO_WIN + 1 {
        return Err(SetViolation::DeuceOvershoot);
    }

    Ok(())
}
