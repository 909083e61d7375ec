//! Progression tracker - achievements and experience points.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::rank::Rank;
use crate::types::{PasswordEvaluation, StrengthLevel};

const LENGTH_CHAMPION_MIN_LENGTH: usize = 20;

/// One-time milestones. Ordered by the sequence in which they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Achievement {
    FirstUpgrade,
    SecurityMaster,
    PasswordExpert,
    LengthChampion,
}

impl Achievement {
    pub const ALL: [Achievement; 4] = [
        Achievement::FirstUpgrade,
        Achievement::SecurityMaster,
        Achievement::PasswordExpert,
        Achievement::LengthChampion,
    ];

    /// Stable identifier, e.g. `first-upgrade`.
    pub fn id(self) -> &'static str {
        match self {
            Achievement::FirstUpgrade => "first-upgrade",
            Achievement::SecurityMaster => "security-master",
            Achievement::PasswordExpert => "password-expert",
            Achievement::LengthChampion => "length-champion",
        }
    }

    pub fn from_id(id: &str) -> Option<Achievement> {
        Achievement::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn points(self) -> u32 {
        match self {
            Achievement::FirstUpgrade => 50,
            Achievement::SecurityMaster => 100,
            Achievement::PasswordExpert => 200,
            Achievement::LengthChampion => 150,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstUpgrade => "First Upgrade",
            Achievement::SecurityMaster => "Security Master",
            Achievement::PasswordExpert => "Password Expert",
            Achievement::LengthChampion => "Length Champion",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstUpgrade => "Reached the intermediate level",
            Achievement::SecurityMaster => "Built an advanced password",
            Achievement::PasswordExpert => "Expert-level password!",
            Achievement::LengthChampion => "Created a password of 20+ characters",
        }
    }

    /// Unlock predicate over a single evaluation.
    pub fn is_earned_by(self, evaluation: &PasswordEvaluation) -> bool {
        match self {
            Achievement::FirstUpgrade => evaluation.level >= StrengthLevel::Intermediate,
            Achievement::SecurityMaster => evaluation.level >= StrengthLevel::Advanced,
            Achievement::PasswordExpert => evaluation.level >= StrengthLevel::Expert,
            Achievement::LengthChampion => {
                evaluation.composition.length >= LENGTH_CHAMPION_MIN_LENGTH
            }
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Achievement {
    type Err = UnknownAchievement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Achievement::from_id(s).ok_or_else(|| UnknownAchievement(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown achievement id: {0}")]
pub struct UnknownAchievement(pub String);

/// Cumulative points and unlocked achievements for one session.
///
/// Both only grow: there is no way to remove an achievement or points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressionState {
    points: u32,
    unlocked: BTreeSet<Achievement>,
}

/// What changed after recording one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Achievements unlocked by this evaluation, in check order.
    pub newly_unlocked: Vec<Achievement>,
    pub points_awarded: u32,
    /// Set when this evaluation unlocked the expert achievement.
    pub reached_max_level: bool,
}

impl ProgressUpdate {
    pub fn is_empty(&self) -> bool {
        self.newly_unlocked.is_empty()
    }
}

impl ProgressionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn unlocked(&self) -> &BTreeSet<Achievement> {
        &self.unlocked
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement)
    }

    pub fn rank(&self) -> Rank {
        Rank::for_points(self.points)
    }

    /// Applies one evaluation. Each achievement is awarded at most once per
    /// state, so recording the same evaluation twice changes nothing the
    /// second time.
    pub fn record(&mut self, evaluation: &PasswordEvaluation) -> ProgressUpdate {
        let mut update = ProgressUpdate::default();

        for achievement in Achievement::ALL {
            if !achievement.is_earned_by(evaluation) || !self.unlocked.insert(achievement) {
                continue;
            }
            self.points = self.points.saturating_add(achievement.points());
            update.points_awarded += achievement.points();
            update.newly_unlocked.push(achievement);
            if achievement == Achievement::PasswordExpert {
                update.reached_max_level = true;
            }

            #[cfg(feature = "tracing")]
            tracing::info!(
                "Achievement unlocked: {} (+{} pts, total {})",
                achievement,
                achievement.points(),
                self.points
            );
        }

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::classify;
    use proptest::prelude::*;

    #[test]
    fn test_basic_password_unlocks_nothing() {
        let mut state = ProgressionState::new();
        let update = state.record(&classify("abcdefgh"));
        assert!(update.is_empty());
        assert_eq!(state.points(), 0);
    }

    #[test]
    fn test_intermediate_unlocks_first_upgrade() {
        let mut state = ProgressionState::new();
        let update = state.record(&classify("abcdefghij1"));
        assert_eq!(update.newly_unlocked, vec![Achievement::FirstUpgrade]);
        assert_eq!(update.points_awarded, 50);
        assert!(!update.reached_max_level);
        assert_eq!(state.points(), 50);
    }

    #[test]
    fn test_expert_twenty_chars_unlocks_everything() {
        let mut state = ProgressionState::new();
        let update = state.record(&classify("Abcdefghijklmnop12!@"));
        assert_eq!(update.newly_unlocked, Achievement::ALL.to_vec());
        assert_eq!(update.points_awarded, 500);
        assert!(update.reached_max_level);
        assert_eq!(state.points(), 500);
        assert_eq!(state.unlocked().len(), 4);
    }

    #[test]
    fn test_length_champion_without_high_level() {
        let mut state = ProgressionState::new();
        let update = state.record(&classify("abcdefghijklmnopqrst"));
        assert_eq!(update.newly_unlocked, vec![Achievement::LengthChampion]);
        assert_eq!(state.points(), 150);
    }

    #[test]
    fn test_length_champion_counts_emoji_as_two() {
        let mut state = ProgressionState::new();
        // 18 letters plus one emoji: 20 UTF-16 units.
        let update = state.record(&classify("abcdefghijklmnopqr\u{1F600}"));
        assert_eq!(update.newly_unlocked, vec![Achievement::LengthChampion]);
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut state = ProgressionState::new();
        let evaluation = classify("Abcdefghij12!@");
        let first = state.record(&evaluation);
        let after_first = state.clone();
        let second = state.record(&evaluation);

        assert_eq!(first.points_awarded, 150);
        assert!(second.is_empty());
        assert_eq!(second.points_awarded, 0);
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_lower_level_after_higher_keeps_progress() {
        let mut state = ProgressionState::new();
        state.record(&classify("Abcdefghij12!@"));
        let update = state.record(&classify("abc"));
        assert!(update.is_empty());
        assert_eq!(state.points(), 150);
        assert!(state.is_unlocked(Achievement::SecurityMaster));
    }

    #[test]
    fn test_max_level_flag_only_once() {
        let mut state = ProgressionState::new();
        assert!(state.record(&classify("Abcdefghijklm1!x")).reached_max_level);
        assert!(!state.record(&classify("Zbcdefghijklm1!x")).reached_max_level);
    }

    #[test]
    fn test_achievement_ids_round_trip() {
        for achievement in Achievement::ALL {
            assert_eq!(achievement.id().parse::<Achievement>(), Ok(achievement));
        }
        assert_eq!(
            "nope".parse::<Achievement>(),
            Err(UnknownAchievement("nope".to_string()))
        );
    }

    proptest! {
        #[test]
        fn points_and_unlocks_never_decrease(pwds in proptest::collection::vec(".{0,24}", 0..12)) {
            let mut state = ProgressionState::new();
            let mut last_points = 0;
            let mut last_unlocked = 0;
            for pwd in &pwds {
                let update = state.record(&classify(pwd));
                prop_assert!(state.points() >= last_points);
                prop_assert!(state.unlocked().len() >= last_unlocked);
                prop_assert_eq!(state.points() - last_points, update.points_awarded);
                last_points = state.points();
                last_unlocked = state.unlocked().len();
            }
            prop_assert!(state.points() <= 500);
        }
    }
}
