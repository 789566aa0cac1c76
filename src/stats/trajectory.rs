use super::record::oldest_first;
use crate::domain::{Match, Player};

/// Ratings the player went through: `baseline`, then the post-match rating of
/// their side for every rated match, oldest first. Unrated matches add no point.
pub fn rating_trajectory(name: &str, matches: &[Match], baseline: i32) -> Vec<i32> {
    let mut points = vec![baseline];
    points.extend(
        oldest_first(name, matches)
            .into_iter()
            .filter_map(|(m, side)| m.rating_after(side)),
    );
    points
}

/// Highest rating reached, never below `baseline` once rated matches exist.
/// Falls back to the current rating when the player has no rated matches.
pub fn peak_rating(player: &Player, matches: &[Match], baseline: i32) -> i32 {
    oldest_first(&player.name, matches)
        .into_iter()
        .filter_map(|(m, side)| m.rating_after(side))
        .fold(None, |peak: Option<i32>, rating| {
            Some(peak.unwrap_or(baseline).max(rating))
        })
        .unwrap_or(player.rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;
    use crate::stats::record::fixtures::*;

    fn history() -> Vec<Match> {
        vec![
            rated(singles("3", "Bo Chen", "Ann Lee", Side::Team1, day(3)), (1516, 1500), (1531, 1485)),
            rated(singles("1", "Ann Lee", "Bo Chen", Side::Team1, day(1)), (1500, 1500), (1516, 1484)),
            singles("2", "Ann Lee", "Cy Park", Side::Team2, day(2)),
            rated(singles("4", "Ann Lee", "Cy Park", Side::Team1, day(4)), (1485, 1500), (1501, 1484)),
        ]
    }

    #[test]
    fn test_trajectory_is_chronological_and_skips_unrated() {
        assert_eq!(
            rating_trajectory("Ann Lee", &history(), 1500),
            vec![1500, 1516, 1485, 1501]
        );
        assert_eq!(rating_trajectory("Bo Chen", &history(), 1500), vec![1500, 1484, 1531]);
        assert_eq!(rating_trajectory("Nobody", &history(), 1500), vec![1500]);
    }

    #[test]
    fn test_peak_tracks_highest_post_match_rating() {
        let ann = Player::new("Ann Lee", 1501);
        assert_eq!(peak_rating(&ann, &history(), 1500), 1516);
    }

    #[test]
    fn test_peak_never_below_baseline_once_rated() {
        let bo = Player::new("Bo Chen", 1400);
        let matches = vec![rated(
            singles("1", "Ann Lee", "Bo Chen", Side::Team1, day(1)),
            (1500, 1500),
            (1516, 1484),
        )];

        assert_eq!(peak_rating(&bo, &matches, 1500), 1500);
    }

    #[test]
    fn test_peak_without_rated_matches_is_current_rating() {
        let cy = Player::new("Cy Park", 1432);
        let matches = vec![singles("2", "Ann Lee", "Cy Park", Side::Team2, day(2))];

        assert_eq!(peak_rating(&cy, &matches, 1500), 1432);
        assert_eq!(peak_rating(&cy, &[], 1500), 1432);
    }
}
