//! Password classifier - composition analysis followed by the rule cascade.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::composition::PasswordComposition;
use crate::rules::RULES;
use crate::types::{PasswordEvaluation, StrengthLevel, StrengthScore};

/// Evaluates a password and returns its composition, level and score.
///
/// Total over all inputs: an empty or very short password reports
/// [`StrengthLevel::Basic`] with a score of 0.
pub fn evaluate_password(password: &SecretString) -> PasswordEvaluation {
    classify(password.expose_secret())
}

/// Same as [`evaluate_password`] for a plain string slice.
pub fn classify(password: &str) -> PasswordEvaluation {
    let composition = PasswordComposition::of(password);
    let mut level = StrengthLevel::Basic;
    let mut score = StrengthScore::ZERO;

    // Orchestrator: every rule runs, a satisfied rule overwrites the previous result
    for (_rule_name, rule_fn) in RULES {
        if let Some(granted) = rule_fn(&composition) {
            #[cfg(feature = "tracing")]
            tracing::trace!("rule '{}' granted {}", _rule_name, granted);
            level = granted;
            score = granted.score();
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: {} score={} length={}",
        level,
        score,
        composition.length
    );

    PasswordEvaluation {
        composition,
        level,
        score,
    }
}

/// Waits `delay`, then evaluates and sends the result through `tx`.
///
/// Nothing is sent if `token` is cancelled before the delay elapses, so a
/// caller can cancel the previous token on every keystroke.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    delay: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let evaluation = evaluate_password(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
