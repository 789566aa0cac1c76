use serde::Serialize;

use crate::domain::{Match, Side};

/// Win/loss summary for one player.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub matches: usize,
    pub wins: usize,
    pub losses: usize,
    /// Percentage, 0 when no matches were played.
    pub win_rate: f64,
}

impl PlayerRecord {
    fn from_counts(matches: usize, wins: usize) -> Self {
        let win_rate = if matches > 0 {
            wins as f64 / matches as f64 * 100.0
        } else {
            0.0
        };
        Self {
            matches,
            wins,
            losses: matches - wins,
            win_rate,
        }
    }
}

pub fn player_record(name: &str, matches: &[Match]) -> PlayerRecord {
    let (played, wins) = matches
        .iter()
        .filter_map(|m| m.side_of(name).map(|side| side == m.winner))
        .fold((0, 0), |(played, wins), won| (played + 1, wins + usize::from(won)));

    PlayerRecord::from_counts(played, wins)
}

/// The player's matches with the side they played on, oldest first.
/// Matches sharing a date keep their stored order.
pub(crate) fn oldest_first<'a>(name: &str, matches: &'a [Match]) -> Vec<(&'a Match, Side)> {
    let mut played: Vec<(&Match, Side)> = matches
        .iter()
        .filter_map(|m| m.side_of(name).map(|side| (m, side)))
        .collect();
    played.sort_by_key(|(m, _)| m.date);
    played
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_record_counts_both_sides() {
        let matches = vec![
            singles("1", "Ann Lee", "Bo Chen", Side::Team1, day(0)),
            singles("2", "Bo Chen", "Ann Lee", Side::Team1, day(1)),
            singles("3", "Bo Chen", "Ann Lee", Side::Team2, day(2)),
            singles("4", "Cy Park", "Bo Chen", Side::Team1, day(3)),
        ];

        let record = player_record("Ann Lee", &matches);
        assert_eq!(record.matches, 3);
        assert_eq!(record.wins, 2);
        assert_eq!(record.losses, 1);
        assert!((record.win_rate - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_record_without_matches() {
        assert_eq!(player_record("Ann Lee", &[]), PlayerRecord::default());
    }

    #[test]
    fn test_oldest_first_is_stable() {
        let matches = vec![
            singles("late", "Ann Lee", "Bo Chen", Side::Team1, day(5)),
            singles("a", "Ann Lee", "Bo Chen", Side::Team1, day(1)),
            singles("b", "Bo Chen", "Ann Lee", Side::Team1, day(1)),
        ];

        let ids: Vec<&str> = oldest_first("Ann Lee", &matches)
            .iter()
            .map(|(m, _)| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "late"]);
        assert_eq!(oldest_first("Ann Lee", &matches)[1].1, Side::Team2);
    }
}
