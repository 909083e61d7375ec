//! Expert rule - sixteen characters covering every class.

use super::RuleResult;
use crate::composition::PasswordComposition;
use crate::types::StrengthLevel;

const MIN_LENGTH: usize = 16;

pub fn expert_rule(composition: &PasswordComposition) -> RuleResult {
    if composition.length >= MIN_LENGTH && composition.has_all_classes() {
        return Some(StrengthLevel::Expert);
    }
    None
}
