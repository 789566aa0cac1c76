use chrono::{DateTime, Utc};
use log::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{Match, MatchRatings, MatchType, SetScore, Side, Teams, tally_sets};
use super::timestamp;

/// Stand-in for the sets of matches stored before per-set scores were kept.
pub const PLACEHOLDER_SET: SetScore = SetScore { team1: 11, team2: 0 };

/// A match as found in storage, before the load-time migration. Every field
/// is optional and loosely typed so that no single record can fail a load.
#[derive(Debug, Default, Deserialize)]
pub struct StoredMatch {
    #[serde(default)]
    id: Value,
    #[serde(rename = "type", default)]
    match_type: Value,
    #[serde(default)]
    players: Value,
    #[serde(default)]
    sets: Value,
    #[serde(default)]
    score: Value,
    #[serde(default)]
    date: Value,
    #[serde(default)]
    winner: Value,
    #[serde(default)]
    ratings: Value,
}

#[derive(Debug, Default, Deserialize)]
struct StoredTeams {
    #[serde(default)]
    team1: Vec<String>,
    #[serde(default)]
    team2: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct StoredScore {
    #[serde(default)]
    team1: i32,
    #[serde(default)]
    team2: i32,
}

impl From<StoredScore> for SetScore {
    fn from(score: StoredScore) -> Self {
        SetScore::new(score.team1, score.team2)
    }
}

impl StoredMatch {
    /// Converts to a [`Match`], filling in whatever older app versions left out.
    /// `index` is the record's position in the stored collection and names
    /// records that have no id. Returns whether anything had to be filled in.
    pub fn migrate(self, index: usize) -> (Match, bool) {
        let mut patched = false;

        let date = parse_date(&self.date);

        let id = match self.id {
            Value::String(id) if !id.is_empty() => id,
            Value::Number(id) => {
                patched = true;
                id.to_string()
            }
            _ => {
                patched = true;
                match date {
                    Some(date) => date.timestamp_millis().to_string(),
                    None => format!("legacy-{index}"),
                }
            }
        };

        let players = decode::<StoredTeams>(self.players).unwrap_or_else(|| {
            patched = true;
            StoredTeams::default()
        });
        let players = Teams::new(players.team1, players.team2);

        let sets = match self.sets {
            Value::Array(items) => items.into_iter().map(parse_set).collect(),
            _ => {
                patched = true;
                vec![PLACEHOLDER_SET]
            }
        };

        let score = decode::<StoredScore>(self.score)
            .map(SetScore::from)
            .unwrap_or_else(|| {
                patched = true;
                tally_sets(&sets)
            });

        let winner = decode::<Side>(self.winner).unwrap_or_else(|| {
            patched = true;
            score.leader().unwrap_or(Side::Team1)
        });

        let match_type = decode::<MatchType>(self.match_type).unwrap_or_else(|| {
            patched = true;
            infer_match_type(&players)
        });

        let date = date.unwrap_or_else(|| {
            patched = true;
            warn!("Match {} has no readable date, using the epoch", id);
            DateTime::<Utc>::default()
        });

        let ratings = match self.ratings {
            Value::Null => None,
            raw => {
                let ratings = decode::<MatchRatings>(raw);
                if ratings.is_none() {
                    patched = true;
                    warn!("Match {} has unreadable ratings, treating it as unrated", id);
                }
                ratings
            }
        };

        let migrated = Match {
            id,
            match_type,
            players,
            sets,
            score,
            date,
            winner,
            ratings,
        };
        (migrated, patched)
    }
}

/// `None` for absent values and for values of the wrong shape.
fn decode<T: DeserializeOwned>(raw: Value) -> Option<T> {
    if raw.is_null() {
        return None;
    }
    serde_json::from_value(raw).ok()
}

fn parse_set(item: Value) -> SetScore {
    decode::<StoredScore>(item).unwrap_or_default().into()
}

fn infer_match_type(players: &Teams) -> MatchType {
    if players.team1.len() > 1 || players.team2.len() > 1 {
        MatchType::Doubles
    } else {
        MatchType::Singles
    }
}

fn parse_date(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::String(raw) => timestamp::parse(raw),
        Value::Number(millis) => millis.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

/// Runs the load-time migration over a whole stored collection. Entries that
/// are not objects at all are dropped with a warning.
pub fn migrate_matches(stored: Vec<Value>) -> Vec<Match> {
    let mut patched_count = 0;
    let mut matches = Vec::with_capacity(stored.len());

    for (index, raw) in stored.into_iter().enumerate() {
        let record = match serde_json::from_value::<StoredMatch>(raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping stored match #{}: {}", index, e);
                continue;
            }
        };
        let (migrated, patched) = record.migrate(index);
        if patched {
            patched_count += 1;
        }
        matches.push(migrated);
    }

    if patched_count > 0 {
        warn!("Migrated {} legacy match record(s)", patched_count);
    }
    matches
}
