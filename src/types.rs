//! Core evaluation types: strength level, score and the evaluation record.

use std::fmt;

use crate::composition::PasswordComposition;
use crate::generator::GeneratorError;

/// Discrete strength level of a password, 1 (basic) to 4 (expert).
///
/// There is no level 0: a missing password is "not evaluated", and a
/// password that satisfies no rule still reports [`StrengthLevel::Basic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Basic = 1,
    Intermediate = 2,
    Advanced = 3,
    Expert = 4,
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 4] = [
        StrengthLevel::Basic,
        StrengthLevel::Intermediate,
        StrengthLevel::Advanced,
        StrengthLevel::Expert,
    ];

    /// Highest reachable level.
    pub const MAX: StrengthLevel = StrengthLevel::Expert;

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Minimum password length this level asks for.
    pub fn min_length(self) -> usize {
        match self {
            StrengthLevel::Basic => 8,
            StrengthLevel::Intermediate => 10,
            StrengthLevel::Advanced => 12,
            StrengthLevel::Expert => 16,
        }
    }

    /// Score reported when this level's rule is the last one satisfied.
    pub fn score(self) -> StrengthScore {
        StrengthScore(self.value() * 25)
    }
}

impl TryFrom<u8> for StrengthLevel {
    type Error = GeneratorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StrengthLevel::Basic),
            2 => Ok(StrengthLevel::Intermediate),
            3 => Ok(StrengthLevel::Advanced),
            4 => Ok(StrengthLevel::Expert),
            other => Err(GeneratorError::InvalidLevel(other)),
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.value())
    }
}

/// Numeric strength indicator: always one of 0, 25, 50, 75 or 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const ZERO: StrengthScore = StrengthScore(0);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Result of classifying one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub composition: PasswordComposition,
    pub level: StrengthLevel,
    pub score: StrengthScore,
}

impl PasswordEvaluation {
    /// True when the password sits at the top of the level table.
    pub fn is_max_level(&self) -> bool {
        self.level == StrengthLevel::MAX
    }
}
