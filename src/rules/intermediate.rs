//! Intermediate rule - ten characters mixing lowercase letters and digits.

use super::RuleResult;
use crate::composition::PasswordComposition;
use crate::types::StrengthLevel;

const MIN_LENGTH: usize = 10;

pub fn intermediate_rule(composition: &PasswordComposition) -> RuleResult {
    if composition.length >= MIN_LENGTH && composition.has_lower && composition.has_digit {
        return Some(StrengthLevel::Intermediate);
    }
    None
}
