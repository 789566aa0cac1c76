use super::models::{MatchType, SetScore, Side, TeamPair};
use crate::validation::{self, MatchViolation};

pub const MAX_SETS: usize = 5;
pub const SLOTS_PER_SIDE: usize = 2;

/// Player slots per side. Singles only uses the first slot.
pub type Lineup = TeamPair<[Option<String>; SLOTS_PER_SIDE]>;

/// A match being filled in, before it is validated and recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDraft {
    pub match_type: MatchType,
    pub lineup: Lineup,
    pub sets: Vec<SetScore>,
}

impl MatchDraft {
    pub fn new(match_type: MatchType) -> Self {
        Self {
            match_type,
            lineup: Lineup::default(),
            sets: vec![SetScore::default()],
        }
    }

    /// Names are stored trimmed, a blank name empties the slot. Returns
    /// `false` when the slot does not exist.
    pub fn assign(&mut self, side: Side, slot: usize, name: impl Into<String>) -> bool {
        let name = name.into();
        let name = name.trim();
        match self.lineup.get_mut(side).get_mut(slot) {
            Some(entry) => {
                *entry = (!name.is_empty()).then(|| name.to_string());
                true
            }
            None => false,
        }
    }

    /// Puts the player into the first empty slot of the side that counts for
    /// this match type. A player already on that side is left where they are.
    /// Returns `false` when every counting slot is taken by someone else.
    pub fn fill_open_slot(&mut self, side: Side, name: &str) -> bool {
        let name = name.trim();
        let slots = &self.lineup.get(side)[..self.match_type.players_per_side()];
        if slots.iter().flatten().any(|taken| taken == name) {
            return true;
        }
        match slots.iter().position(Option::is_none) {
            Some(slot) => self.assign(side, slot, name),
            None => false,
        }
    }

    pub fn clear(&mut self, side: Side, slot: usize) {
        if let Some(entry) = self.lineup.get_mut(side).get_mut(slot) {
            *entry = None;
        }
    }

    pub fn add_set(&mut self) -> bool {
        if self.sets.len() >= MAX_SETS {
            return false;
        }
        self.sets.push(SetScore::default());
        true
    }

    pub fn remove_set(&mut self, index: usize) -> bool {
        if self.sets.len() <= 1 || index >= self.sets.len() {
            return false;
        }
        self.sets.remove(index);
        true
    }

    pub fn set_score(&mut self, index: usize, side: Side, points: i32) -> bool {
        match self.sets.get_mut(index) {
            Some(set) => {
                *set.get_mut(side) = points;
                true
            }
            None => false,
        }
    }

    /// Names of the players that count for this match type, in slot order.
    pub fn team_names(&self, side: Side) -> Vec<String> {
        self.lineup
            .get(side)
            .iter()
            .take(self.match_type.players_per_side())
            .flatten()
            .cloned()
            .collect()
    }

    /// Every name already placed in a counting slot, both sides.
    pub fn used_players(&self) -> Vec<String> {
        Side::ALL
            .into_iter()
            .flat_map(|side| self.team_names(side))
            .collect()
    }

    pub fn validate(&self) -> Result<(), MatchViolation> {
        validation::validate_match(&self.lineup, &self.sets, self.match_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_one_blank_set() {
        let draft = MatchDraft::new(MatchType::Singles);

        assert_eq!(draft.sets, vec![SetScore::default()]);
        assert!(draft.used_players().is_empty());
    }

    #[test]
    fn test_set_count_limits() {
        let mut draft = MatchDraft::new(MatchType::Singles);

        assert!(!draft.remove_set(0));
        for _ in 1..MAX_SETS {
            assert!(draft.add_set());
        }
        assert!(!draft.add_set());
        assert_eq!(draft.sets.len(), MAX_SETS);

        assert!(draft.remove_set(2));
        assert_eq!(draft.sets.len(), MAX_SETS - 1);
        assert!(!draft.remove_set(10));
    }

    #[test]
    fn test_singles_ignores_second_slot() {
        let mut draft = MatchDraft::new(MatchType::Singles);
        draft.assign(Side::Team1, 0, "Ann Lee");
        draft.assign(Side::Team1, 1, "Bo Chen");
        draft.assign(Side::Team2, 0, "Cy Park");

        assert_eq!(draft.team_names(Side::Team1), vec!["Ann Lee"]);
        assert_eq!(draft.used_players(), vec!["Ann Lee", "Cy Park"]);

        draft.match_type = MatchType::Doubles;
        assert_eq!(draft.team_names(Side::Team1), vec!["Ann Lee", "Bo Chen"]);
    }

    #[test]
    fn test_assign_rejects_missing_slot() {
        let mut draft = MatchDraft::new(MatchType::Doubles);

        assert!(!draft.assign(Side::Team2, 2, "Di Moss"));
        assert!(draft.assign(Side::Team2, 1, "Di Moss"));
        draft.clear(Side::Team2, 1);
        assert!(draft.team_names(Side::Team2).is_empty());
    }

    #[test]
    fn test_set_score_edits_one_side() {
        let mut draft = MatchDraft::new(MatchType::Singles);

        assert!(draft.set_score(0, Side::Team2, 11));
        assert!(draft.set_score(0, Side::Team1, 6));
        assert!(!draft.set_score(1, Side::Team1, 11));
        assert_eq!(draft.sets[0], SetScore::new(6, 11));
    }

    #[test]
    fn test_assign_trims_names() {
        let mut draft = MatchDraft::new(MatchType::Singles);
        draft.assign(Side::Team1, 0, "  Ann Lee ");
        draft.assign(Side::Team2, 0, "   ");

        assert_eq!(draft.team_names(Side::Team1), vec!["Ann Lee"]);
        assert_eq!(draft.lineup.team2[0], None);
    }

    #[test]
    fn test_fill_open_slot_keeps_earlier_picks() {
        let mut draft = MatchDraft::new(MatchType::Doubles);
        draft.assign(Side::Team1, 0, "Ann Lee");

        assert!(draft.fill_open_slot(Side::Team1, "Bo Chen"));
        assert_eq!(draft.team_names(Side::Team1), vec!["Ann Lee", "Bo Chen"]);

        assert!(draft.fill_open_slot(Side::Team1, " Ann Lee"));
        assert!(!draft.fill_open_slot(Side::Team1, "Cy Park"));
        assert_eq!(draft.team_names(Side::Team1), vec!["Ann Lee", "Bo Chen"]);
    }

    #[test]
    fn test_fill_open_slot_respects_singles() {
        let mut draft = MatchDraft::new(MatchType::Singles);
        draft.assign(Side::Team2, 0, "Cy Park");

        assert!(!draft.fill_open_slot(Side::Team2, "Di Moss"));
        assert_eq!(draft.lineup.team2[1], None);
    }
}
