//! Session configuration.

use std::time::Duration;

use crate::generator::RepairMode;

/// How long the max-level celebration stays up.
pub const DEFAULT_CELEBRATION_WINDOW: Duration = Duration::from_secs(3);

/// Debounce applied by `evaluate_password_tx` before evaluating.
pub const DEFAULT_EVALUATION_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    pub celebration_window: Duration,
    pub repair_mode: RepairMode,
    pub evaluation_delay: Duration,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            celebration_window: DEFAULT_CELEBRATION_WINDOW,
            repair_mode: RepairMode::default(),
            evaluation_delay: DEFAULT_EVALUATION_DELAY,
        }
    }
}

impl TrainerConfig {
    pub fn with_celebration_window(mut self, window: Duration) -> Self {
        self.celebration_window = window;
        self
    }

    pub fn with_repair_mode(mut self, mode: RepairMode) -> Self {
        self.repair_mode = mode;
        self
    }

    pub fn with_evaluation_delay(mut self, delay: Duration) -> Self {
        self.evaluation_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.celebration_window, Duration::from_secs(3));
        assert_eq!(config.repair_mode, RepairMode::DistinctPositions);
        assert_eq!(config.evaluation_delay, Duration::from_millis(300));
    }

    #[test]
    fn test_builders() {
        let config = TrainerConfig::default()
            .with_celebration_window(Duration::from_secs(1))
            .with_repair_mode(RepairMode::LastCharacter)
            .with_evaluation_delay(Duration::ZERO);
        assert_eq!(config.celebration_window, Duration::from_secs(1));
        assert_eq!(config.repair_mode, RepairMode::LastCharacter);
        assert_eq!(config.evaluation_delay, Duration::ZERO);
    }
}
