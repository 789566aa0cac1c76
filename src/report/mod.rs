//! Text and JSON rendering of the league views for the terminal.

pub mod rules;

use std::fmt::Write as _;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::domain::{Match, Side};
use crate::stats::{HallOfFameEntry, MatchView, PlayerDetail, PlayerRecord, RankingEntry};

pub use rules::RULES;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Medal for the podium, `#n` for everyone else.
pub fn rank_badge(rank: usize) -> String {
    match rank {
        1 => "🏆".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{n}"),
    }
}

fn record_summary(record: &PlayerRecord) -> String {
    format!(
        "{} matches  {}W {}L  {:.1}%",
        record.matches, record.wins, record.losses, record.win_rate
    )
}

pub fn render_rankings(entries: &[RankingEntry]) -> String {
    if entries.is_empty() {
        return "No players yet. Add one with `add-player`.".to_string();
    }

    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in entries {
        let mut name = format!("{:<width$}", entry.name);
        if entry.is_retired {
            name = name.dimmed().to_string();
        }
        let _ = write!(
            out,
            "{:>4}  {}  {:>5}  {}",
            rank_badge(entry.rank),
            name,
            entry.rating.to_string().bold(),
            record_summary(&entry.record)
        );
        if entry.is_retired {
            out.push_str("  (retired)");
        }
        out.push('\n');
    }
    out
}

pub fn render_hall_of_fame(entries: &[HallOfFameEntry]) -> String {
    if entries.is_empty() {
        return "No retired players yet.".to_string();
    }

    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  peak {:>5}  now {:>5}  {}",
            rank_badge(entry.rank),
            entry.name,
            entry.peak_rating.to_string().bold(),
            entry.current_rating,
            record_summary(&entry.record)
        );
    }
    out
}

fn team_label(record: &Match, side: Side) -> String {
    let names = record.roster(side);
    let label = if names.is_empty() {
        match side {
            Side::Team1 => "Team 1".to_string(),
            Side::Team2 => "Team 2".to_string(),
        }
    } else {
        names.join(" & ")
    };

    if record.winner == side {
        label.bold().to_string()
    } else {
        label
    }
}

fn signed(delta: i32) -> String {
    format!("{delta:+}")
}

/// One match as a small block of lines. With a perspective the block is
/// told from that player's side.
pub fn render_match_card(view: &MatchView) -> String {
    let record = &view.record;
    let mut out = String::new();

    let _ = write!(
        out,
        "{}  {}  {}",
        record.date.format(DATE_FORMAT),
        record.match_type,
        format!("#{}", record.id).dimmed()
    );
    if let Some(perspective) = &view.perspective {
        let outcome = if perspective.is_win {
            "WIN".green().bold()
        } else {
            "LOSS".red().bold()
        };
        let _ = write!(out, "  {} vs {}", outcome, perspective.opponent);
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "  {}  {} - {}  {}",
        team_label(record, Side::Team1),
        record.score.team1,
        record.score.team2,
        team_label(record, Side::Team2)
    );

    if !record.sets.is_empty() {
        let sets: Vec<String> = record.sets.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "  Sets: {}", sets.join(" "));
    }

    match (&view.perspective, record.ratings) {
        (Some(perspective), Some(_)) => {
            let change = signed(perspective.rating_change);
            let change = if perspective.rating_change >= 0 {
                change.green()
            } else {
                change.red()
            };
            let _ = writeln!(
                out,
                "  Rating: {} -> {} ({})",
                perspective.rating_before, perspective.rating_after, change
            );
        }
        (None, Some(ratings)) => {
            let _ = writeln!(
                out,
                "  Rating: {} / {}",
                signed(ratings.change.winners).green(),
                ratings.change.losers.to_string().red()
            );
        }
        (_, None) => {}
    }
    out
}

pub fn render_ledger(views: &[MatchView]) -> String {
    if views.is_empty() {
        return "No matches yet. Record one with `add-match`.".to_string();
    }
    views.iter().map(render_match_card).collect::<Vec<_>>().join("\n")
}

pub fn render_player_detail(detail: &PlayerDetail) -> String {
    let mut out = String::new();

    let _ = write!(out, "{}", detail.name.bold());
    if detail.is_retired {
        let _ = write!(out, " {}", "(retired)".dimmed());
    }
    out.push('\n');
    let _ = writeln!(out, "Rating: {}", detail.rating.to_string().bold());
    let _ = writeln!(out, "Record: {}", record_summary(&detail.record));

    let trajectory: Vec<String> = detail.trajectory.iter().map(ToString::to_string).collect();
    let _ = writeln!(out, "History: {}", trajectory.join(" -> "));

    if detail.history.is_empty() {
        out.push_str("\nNo matches played yet.\n");
    } else {
        for view in &detail.history {
            out.push('\n');
            out.push_str(&render_match_card(view));
        }
    }
    out
}

/// Confirmation shown after a match was stored.
pub fn render_match_saved(record: &Match) -> String {
    let mut out = format!(
        "{} defeated {}",
        record.winners().join(" & "),
        record.losers().join(" & ")
    );
    if let Some(ratings) = record.ratings {
        let _ = write!(
            out,
            "\n\nRating Changes:\nWinners: +{} points\nLosers: {} points",
            ratings.change.winners, ratings.change.losers
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Player;
    use crate::stats::record::fixtures::*;
    use crate::stats::{match_ledger, player_detail, rankings};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_rank_badges() {
        assert_eq!(rank_badge(1), "🏆");
        assert_eq!(rank_badge(2), "🥈");
        assert_eq!(rank_badge(3), "🥉");
        assert_eq!(rank_badge(4), "#4");
    }

    #[test]
    fn test_match_saved_message() {
        let record = rated(
            singles("1", "Ann Lee", "Bo Chen", Side::Team2, day(0)),
            (1500, 1500),
            (1484, 1516),
        );

        assert_eq!(
            render_match_saved(&record),
            "Bo Chen defeated Ann Lee\n\nRating Changes:\nWinners: +16 points\nLosers: -16 points"
        );
    }

    #[test]
    fn test_rankings_table() {
        plain();
        let players = vec![
            Player::new("Ann Lee", 1516),
            Player {
                is_retired: true,
                ..Player::new("Bo Chen", 1484)
            },
        ];

        let text = render_rankings(&rankings(&players, &[], true));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("🏆") && lines[0].contains("Ann Lee") && lines[0].contains("1516"));
        assert!(lines[1].ends_with("(retired)"));
        assert!(render_rankings(&[]).starts_with("No players yet"));
    }

    #[test]
    fn test_ledger_card() {
        plain();
        let matches = vec![rated(
            singles("42", "Ann Lee", "Bo Chen", Side::Team1, day(0)),
            (1500, 1500),
            (1516, 1484),
        )];

        let text = render_ledger(&match_ledger(&matches));
        assert!(text.starts_with("2024-01-01 12:00  singles  #42\n"));
        assert!(text.contains("  Ann Lee  1 - 0  Bo Chen\n"));
        assert!(text.contains("  Sets: 11-5\n"));
        assert!(text.contains("  Rating: +16 / -16\n"));
    }

    #[test]
    fn test_player_detail_card_uses_perspective() {
        plain();
        let players = vec![Player::new("Bo Chen", 1484)];
        let matches = vec![rated(
            singles("42", "Ann Lee", "Bo Chen", Side::Team1, day(0)),
            (1500, 1500),
            (1516, 1484),
        )];

        let detail = player_detail("Bo Chen", &players, &matches, 1500).unwrap();
        let text = render_player_detail(&detail);

        assert!(text.starts_with("Bo Chen\nRating: 1484\n"));
        assert!(text.contains("History: 1500 -> 1484\n"));
        assert!(text.contains("LOSS vs Ann Lee"));
        assert!(text.contains("Rating: 1500 -> 1484 (-16)"));
    }

    #[test]
    fn test_json_output_is_pretty() {
        let json = render_json(&vec![1, 2]).unwrap();
        assert_eq!(json, "[\n  1,\n  2\n]");
    }
}
