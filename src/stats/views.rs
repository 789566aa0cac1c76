use log::debug;
use serde::Serialize;

use super::record::{PlayerRecord, oldest_first, player_record};
use super::trajectory::rating_trajectory;
use crate::domain::{Match, Player};

/// How a match looked for one of its players.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPerspective {
    pub player: String,
    pub is_win: bool,
    pub opponent: String,
    pub rating_before: i32,
    pub rating_after: i32,
    pub rating_change: i32,
}

/// A match ready for display, optionally seen from one player's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    #[serde(rename = "match")]
    pub record: Match,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective: Option<PlayerPerspective>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    pub name: String,
    pub rating: i32,
    pub is_retired: bool,
    #[serde(flatten)]
    pub record: PlayerRecord,
    pub trajectory: Vec<i32>,
    /// Newest first.
    pub history: Vec<MatchView>,
}

/// Every match, newest first.
pub fn match_ledger(matches: &[Match]) -> Vec<MatchView> {
    let mut views: Vec<MatchView> = matches
        .iter()
        .map(|m| MatchView {
            record: m.clone(),
            perspective: None,
        })
        .collect();
    views.sort_by(|a, b| b.record.date.cmp(&a.record.date));
    views
}

pub fn player_detail(
    name: &str,
    players: &[Player],
    matches: &[Match],
    baseline: i32,
) -> Option<PlayerDetail> {
    let player = players.iter().find(|p| p.name == name)?;

    let mut current = baseline;
    let mut history: Vec<MatchView> = oldest_first(name, matches)
        .into_iter()
        .map(|(m, side)| {
            let (rating_before, rating_after) = match m.ratings {
                Some(ratings) => (*ratings.before.get(side), *ratings.after.get(side)),
                None => (current, current),
            };
            current = rating_after;

            MatchView {
                record: m.clone(),
                perspective: Some(PlayerPerspective {
                    player: name.to_string(),
                    is_win: m.winner == side,
                    opponent: m.roster(side.opponent()).join(" & "),
                    rating_before,
                    rating_after,
                    rating_change: rating_after - rating_before,
                }),
            }
        })
        .collect();
    history.reverse();

    debug!("{} has {} matches on record", name, history.len());
    Some(PlayerDetail {
        name: player.name.clone(),
        rating: player.rating,
        is_retired: player.is_retired,
        record: player_record(name, matches),
        trajectory: rating_trajectory(name, matches, baseline),
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;
    use crate::stats::record::fixtures::*;

    fn matches() -> Vec<Match> {
        vec![
            singles("2", "Bo Chen", "Ann Lee", Side::Team1, day(2)),
            rated(
                singles("1", "Ann Lee", "Bo Chen", Side::Team1, day(1)),
                (1500, 1500),
                (1516, 1484),
            ),
            rated(
                singles("3", "Cy Park", "Ann Lee", Side::Team2, day(3)),
                (1500, 1516),
                (1485, 1531),
            ),
        ]
    }

    #[test]
    fn test_ledger_is_newest_first() {
        let ids: Vec<String> = match_ledger(&matches()).into_iter().map(|v| v.record.id).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_detail_history_from_players_side() {
        let players = vec![Player::new("Ann Lee", 1531), Player::new("Bo Chen", 1484)];
        let detail = player_detail("Ann Lee", &players, &matches(), 1500).unwrap();

        assert_eq!(detail.rating, 1531);
        assert_eq!(detail.record.matches, 3);
        assert_eq!(detail.record.wins, 2);
        assert_eq!(detail.trajectory, vec![1500, 1516, 1531]);

        let ids: Vec<&str> = detail.history.iter().map(|v| v.record.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);

        let newest = detail.history[0].perspective.as_ref().unwrap();
        assert!(newest.is_win);
        assert_eq!(newest.opponent, "Cy Park");
        assert_eq!(newest.rating_change, 15);

        let unrated = detail.history[1].perspective.as_ref().unwrap();
        assert!(!unrated.is_win);
        assert_eq!((unrated.rating_before, unrated.rating_after), (1516, 1516));
        assert_eq!(unrated.rating_change, 0);
    }

    #[test]
    fn test_detail_joins_doubles_opponents() {
        let mut doubles = singles("9", "Ann Lee", "Cy Park", Side::Team1, day(1));
        doubles.players.team1.push("Bo Chen".to_string());
        doubles.players.team2.push("Di Moss".to_string());
        let players = vec![Player::new("Bo Chen", 1500)];

        let detail = player_detail("Bo Chen", &players, &[doubles], 1500).unwrap();
        let perspective = detail.history[0].perspective.as_ref().unwrap();
        assert_eq!(perspective.opponent, "Cy Park & Di Moss");
        assert!(perspective.is_win);
    }

    #[test]
    fn test_unknown_player_has_no_detail() {
        assert!(player_detail("Nobody", &[], &matches(), 1500).is_none());
    }
}
