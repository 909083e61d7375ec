//! Basic rule - eight characters with at least one letter.

use super::RuleResult;
use crate::composition::PasswordComposition;
use crate::types::StrengthLevel;

const MIN_LENGTH: usize = 8;

pub fn basic_rule(composition: &PasswordComposition) -> RuleResult {
    if composition.length >= MIN_LENGTH && (composition.has_lower || composition.has_upper) {
        return Some(StrengthLevel::Basic);
    }
    None
}
