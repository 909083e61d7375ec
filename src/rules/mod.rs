//! Strength rules
//!
//! Each rule inspects a composition and, when satisfied, names the level it
//! grants. The evaluator runs them in ascending order and the last satisfied
//! rule wins.

mod advanced;
mod basic;
mod expert;
mod intermediate;

pub use advanced::advanced_rule;
pub use basic::basic_rule;
pub use expert::expert_rule;
pub use intermediate::intermediate_rule;

use crate::composition::PasswordComposition;
use crate::types::StrengthLevel;

/// Result type for rule functions.
/// - `Some(level)` - rule satisfied, grants `level`
/// - `None` - rule not satisfied
pub type RuleResult = Option<StrengthLevel>;

pub type Rule = fn(&PasswordComposition) -> RuleResult;

/// The cascade, in evaluation order.
pub const RULES: [(&str, Rule); 4] = [
    ("basic", basic_rule),
    ("intermediate", intermediate_rule),
    ("advanced", advanced_rule),
    ("expert", expert_rule),
];
