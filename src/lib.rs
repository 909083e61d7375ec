//! Gamified password strength trainer
//!
//! This library classifies passwords into four strength levels, generates
//! example passwords for each level and tracks a player's achievements and
//! experience points across a session.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//!   and a self-clearing celebration timer
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_trainer::{TrainerConfig, TrainerSession, evaluate_password, StrengthLevel};
//! use secrecy::SecretString;
//!
//! // Classify a password on its own
//! let password = SecretString::new("Abcdefghij12!@".to_string().into());
//! let evaluation = evaluate_password(&password);
//! assert_eq!(evaluation.level, StrengthLevel::Advanced);
//! assert_eq!(evaluation.score.value(), 75);
//!
//! // Or drive a whole session
//! let mut session = TrainerSession::new(TrainerConfig::default());
//! let update = session.generate(2).expect("level 2 is valid");
//! println!("Unlocked: {:?}", update.newly_unlocked);
//! println!("Rank: {}", session.rank());
//! ```

// Internal modules
mod celebration;
mod clipboard;
mod composition;
mod config;
mod evaluator;
mod generator;
mod guidance;
mod progression;
mod rank;
mod rules;
mod session;
mod types;

// Public API
pub use celebration::Celebration;
pub use clipboard::{ClipboardError, ClipboardWriter, CopyOutcome, NoClipboard, copy_text};
pub use composition::{CharClass, PasswordComposition, Requirement, CLASSIFIER_SYMBOLS};
pub use config::TrainerConfig;
pub use evaluator::{classify, evaluate_password};
pub use generator::{GeneratorError, PasswordGenerator, RepairMode, generate_password};
pub use guidance::{LevelProfile, Tip, security_fact, security_facts, tip_for};
pub use progression::{Achievement, ProgressUpdate, ProgressionState, UnknownAchievement};
pub use rank::Rank;
pub use session::TrainerSession;
pub use types::{PasswordEvaluation, StrengthLevel, StrengthScore};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
