use log::debug;
use serde::Serialize;

use super::record::{PlayerRecord, player_record};
use super::trajectory::peak_rating;
use crate::domain::{Match, Player};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub rank: usize,
    pub name: String,
    pub rating: i32,
    pub is_retired: bool,
    #[serde(flatten)]
    pub record: PlayerRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFameEntry {
    pub rank: usize,
    pub name: String,
    pub peak_rating: i32,
    pub current_rating: i32,
    #[serde(flatten)]
    pub record: PlayerRecord,
}

/// Players by current rating, highest first. Equal ratings keep roster order.
pub fn rankings(players: &[Player], matches: &[Match], include_retired: bool) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = players
        .iter()
        .filter(|p| include_retired || !p.is_retired)
        .map(|p| RankingEntry {
            rank: 0,
            name: p.name.clone(),
            rating: p.rating,
            is_retired: p.is_retired,
            record: player_record(&p.name, matches),
        })
        .collect();

    entries.sort_by(|a, b| b.rating.cmp(&a.rating));
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }

    debug!("Ranked {} of {} players", entries.len(), players.len());
    entries
}

/// Retired players by the best rating they ever held.
pub fn hall_of_fame(players: &[Player], matches: &[Match], baseline: i32) -> Vec<HallOfFameEntry> {
    let mut entries: Vec<HallOfFameEntry> = players
        .iter()
        .filter(|p| p.is_retired)
        .map(|p| HallOfFameEntry {
            rank: 0,
            name: p.name.clone(),
            peak_rating: peak_rating(p, matches, baseline),
            current_rating: p.rating,
            record: player_record(&p.name, matches),
        })
        .collect();

    entries.sort_by(|a, b| b.peak_rating.cmp(&a.peak_rating));
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;
    use crate::stats::record::fixtures::*;

    fn retired(name: &str, rating: i32) -> Player {
        Player {
            is_retired: true,
            ..Player::new(name, rating)
        }
    }

    #[test]
    fn test_retired_players_hidden_by_default() {
        let players = vec![Player::new("Ann Lee", 1600), retired("Bo Chen", 1700)];

        let active = rankings(&players, &[], false);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Ann Lee");
        assert_eq!(active[0].rank, 1);

        let everyone = rankings(&players, &[], true);
        assert_eq!(everyone[0].name, "Bo Chen");
        assert_eq!(everyone[0].rank, 1);
        assert!(everyone[0].is_retired);
        assert_eq!(everyone[1].rank, 2);
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let players = vec![
            Player::new("Cy Park", 1500),
            Player::new("Ann Lee", 1550),
            Player::new("Bo Chen", 1500),
        ];

        let names: Vec<String> = rankings(&players, &[], false).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Ann Lee", "Cy Park", "Bo Chen"]);
    }

    #[test]
    fn test_ranking_carries_record() {
        let players = vec![Player::new("Ann Lee", 1516), Player::new("Bo Chen", 1484)];
        let matches = vec![singles("1", "Ann Lee", "Bo Chen", Side::Team1, day(0))];

        let ranking = rankings(&players, &matches, false);
        assert_eq!(ranking[0].record.wins, 1);
        assert_eq!(ranking[1].record.losses, 1);
        assert_eq!(ranking[1].record.win_rate, 0.0);
    }

    #[test]
    fn test_ranking_json_shape() {
        let players = vec![Player::new("Ann Lee", 1516)];
        let json = serde_json::to_value(rankings(&players, &[], false)).unwrap();

        assert_eq!(json[0]["rank"], 1);
        assert_eq!(json[0]["isRetired"], false);
        assert_eq!(json[0]["winRate"], 0.0);
    }

    #[test]
    fn test_hall_of_fame_orders_by_peak() {
        let players = vec![
            retired("Ann Lee", 1450),
            Player::new("Bo Chen", 1900),
            retired("Cy Park", 1480),
        ];
        let matches = vec![rated(
            singles("1", "Ann Lee", "Cy Park", Side::Team1, day(0)),
            (1500, 1500),
            (1516, 1484),
        )];

        let hall = hall_of_fame(&players, &matches, 1500);
        assert_eq!(hall.len(), 2);
        assert_eq!(hall[0].name, "Ann Lee");
        assert_eq!(hall[0].peak_rating, 1516);
        assert_eq!(hall[0].current_rating, 1450);
        assert_eq!(hall[1].name, "Cy Park");
        assert_eq!(hall[1].peak_rating, 1500);
        assert_eq!(hall[1].rank, 2);
    }
}
