use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Rostered player. The name is the identifier, there is no separate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub rating: i32,
    #[serde(default)]
    pub is_retired: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, rating: i32) -> Self {
        Self {
            name: name.into(),
            rating,
            is_retired: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Team1, Side::Team2];

    pub fn opponent(self) -> Side {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Team1 => "team1",
            Side::Team2 => "team2",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "team1" | "1" => Ok(Side::Team1),
            "team2" | "2" => Ok(Side::Team2),
            other => Err(format!("unknown team '{other}', expected team1 or team2")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Singles,
    Doubles,
}

impl MatchType {
    pub fn players_per_side(self) -> usize {
        match self {
            MatchType::Singles => 1,
            MatchType::Doubles => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Singles => "singles",
            MatchType::Doubles => "doubles",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "singles" => Ok(MatchType::Singles),
            "doubles" => Ok(MatchType::Doubles),
            other => Err(format!("unknown match type '{other}', expected singles or doubles")),
        }
    }
}

/// A value held once per side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamPair<T> {
    pub team1: T,
    pub team2: T,
}

impl<T> TeamPair<T> {
    pub fn new(team1: T, team2: T) -> Self {
        Self { team1, team2 }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Team1 => &mut self.team1,
            Side::Team2 => &mut self.team2,
        }
    }
}

/// Points scored in one set, or sets won in a match.
pub type SetScore = TeamPair<i32>;
pub type Teams = TeamPair<Vec<String>>;
pub type TeamRatings = TeamPair<i32>;

impl TeamPair<i32> {
    pub fn leader(&self) -> Option<Side> {
        if self.team1 > self.team2 {
            Some(Side::Team1)
        } else if self.team2 > self.team1 {
            Some(Side::Team2)
        } else {
            None
        }
    }

    pub fn is_blank(&self) -> bool {
        self.team1 == 0 && self.team2 == 0
    }
}

impl FromStr for TeamPair<i32> {
    type Err = String;

    /// Parses `11-9` or `11:9`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = s
            .split_once(['-', ':'])
            .ok_or_else(|| format!("invalid set score '{s}', expected e.g. 11-9"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| format!("invalid points '{}' in set score '{s}'", part.trim()))
        };
        Ok(TeamPair::new(parse(left)?, parse(right)?))
    }
}

impl fmt::Display for TeamPair<i32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.team1, self.team2)
    }
}

/// Counts the sets won by each side.
pub fn tally_sets(sets: &[SetScore]) -> SetScore {
    sets.iter()
        .filter_map(SetScore::leader)
        .fold(SetScore::default(), |mut tally, side| {
            *tally.get_mut(side) += 1;
            tally
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    pub winners: i32,
    pub losers: i32,
}

/// Team ratings around a match and the delta applied to each member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRatings {
    pub before: TeamRatings,
    pub after: TeamRatings,
    pub change: RatingChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub players: Teams,
    pub sets: Vec<SetScore>,
    pub score: SetScore,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub winner: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<MatchRatings>,
}

impl Match {
    pub fn roster(&self, side: Side) -> &[String] {
        self.players.get(side)
    }

    /// Side the player was on. Team1 wins if a name is listed on both.
    pub fn side_of(&self, name: &str) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.roster(side).iter().any(|n| n == name))
    }

    pub fn involves(&self, name: &str) -> bool {
        self.side_of(name).is_some()
    }

    pub fn winners(&self) -> &[String] {
        self.roster(self.winner)
    }

    pub fn losers(&self) -> &[String] {
        self.roster(self.winner.opponent())
    }

    pub fn rating_after(&self, side: Side) -> Option<i32> {
        self.ratings.map(|r| *r.after.get(side))
    }
}
