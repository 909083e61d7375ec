//! Trainer session - the single owner of a player's password and progress.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::{mpsc, watch};

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::celebration::Celebration;
use crate::clipboard::{ClipboardWriter, CopyOutcome, copy_text};
use crate::config::TrainerConfig;
use crate::evaluator::evaluate_password;
#[cfg(feature = "async")]
use crate::evaluator::evaluate_password_tx;
use crate::generator::{GeneratorError, PasswordGenerator};
use crate::progression::{ProgressUpdate, ProgressionState};
use crate::rank::Rank;
use crate::types::{PasswordEvaluation, StrengthLevel};

/// State for one player, from page load to page close.
///
/// Every evaluation flows through here: the generated or typed password is
/// classified, then recorded in the [`ProgressionState`]. Dropping the
/// session cancels any pending celebration timer.
pub struct TrainerSession<R = StdRng> {
    config: TrainerConfig,
    generator: PasswordGenerator,
    rng: R,
    password: Option<SecretString>,
    evaluation: Option<PasswordEvaluation>,
    current_level: StrengthLevel,
    progression: ProgressionState,
    celebration: Celebration,
}

impl TrainerSession<StdRng> {
    pub fn new(config: TrainerConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl Default for TrainerSession<StdRng> {
    fn default() -> Self {
        Self::new(TrainerConfig::default())
    }
}

impl<R: Rng> TrainerSession<R> {
    pub fn with_rng(config: TrainerConfig, rng: R) -> Self {
        Self {
            generator: PasswordGenerator::new(config.repair_mode),
            celebration: Celebration::new(config.celebration_window),
            config,
            rng,
            password: None,
            evaluation: None,
            current_level: StrengthLevel::Basic,
            progression: ProgressionState::new(),
        }
    }

    /// Generates an example password for `level` and evaluates it.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidLevel`] for levels outside 1..=4;
    /// the session is left untouched in that case.
    pub fn generate(&mut self, level: u8) -> Result<ProgressUpdate, GeneratorError> {
        let password = self.generator.generate(level, &mut self.rng)?;
        Ok(self.accept(password))
    }

    /// Evaluates a password typed by the player.
    ///
    /// An empty password clears the current one and returns `None`:
    /// nothing is evaluated and progression is not touched.
    pub fn submit(&mut self, password: SecretString) -> Option<ProgressUpdate> {
        if password.expose_secret().is_empty() {
            self.password = None;
            self.evaluation = None;
            return None;
        }
        Some(self.accept(password))
    }

    fn accept(&mut self, password: SecretString) -> ProgressUpdate {
        let evaluation = evaluate_password(&password);
        let update = self.progression.record(&evaluation);

        if update.reached_max_level {
            self.celebration.raise();
        }

        self.current_level = evaluation.level;
        self.evaluation = Some(evaluation);
        self.password = Some(password);
        update
    }
}

impl<R> TrainerSession<R> {
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    pub fn evaluation(&self) -> Option<&PasswordEvaluation> {
        self.evaluation.as_ref()
    }

    /// Level of the last evaluated password. Starts at [`StrengthLevel::Basic`]
    /// and is kept when the password is cleared.
    pub fn current_level(&self) -> StrengthLevel {
        self.current_level
    }

    pub fn progression(&self) -> &ProgressionState {
        &self.progression
    }

    pub fn rank(&self) -> Rank {
        self.progression.rank()
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_active()
    }

    #[cfg(feature = "async")]
    pub fn celebration_updates(&self) -> Option<watch::Receiver<bool>> {
        self.celebration.subscribe()
    }

    /// Live preview for a password still being typed: waits the configured
    /// `evaluation_delay`, then sends the evaluation through `tx`.
    ///
    /// Progression is not touched; call [`TrainerSession::submit`] once the
    /// password is final. Cancel `token` to drop a stale preview.
    #[cfg(feature = "async")]
    pub async fn preview_password_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<PasswordEvaluation>,
    ) {
        evaluate_password_tx(password, self.config.evaluation_delay, token, tx).await;
    }

    /// Copies the current password. Never fails: clipboard errors come back
    /// as [`CopyOutcome::Failed`].
    pub fn copy_password<C: ClipboardWriter + ?Sized>(&self, clipboard: &mut C) -> CopyOutcome {
        match &self.password {
            Some(password) => copy_text(clipboard, password.expose_secret()),
            None => CopyOutcome::NothingToCopy,
        }
    }
}

impl<R> fmt::Debug for TrainerSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainerSession")
            .field("config", &self.config)
            .field("has_password", &self.password.is_some())
            .field("evaluation", &self.evaluation)
            .field("current_level", &self.current_level)
            .field("progression", &self.progression)
            .field("celebration", &self.celebration)
            .finish_non_exhaustive()
    }
}
