//! Transient "max level reached" celebration flag.
//!
//! The flag clears itself after a fixed window. With the `async` feature and
//! a tokio runtime available, a background task flips a watch channel when the
//! window ends; that task is cancelled when the [`Celebration`] is dropped.
//! The deadline is checked in every case.

use std::time::{Duration, Instant};

#[cfg(feature = "async")]
use tokio::sync::watch;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct Celebration {
    window: Duration,
    raised_at: Option<Instant>,
    #[cfg(feature = "async")]
    timer: Option<AutoClear>,
}

#[cfg(feature = "async")]
#[derive(Debug)]
struct AutoClear {
    token: CancellationToken,
    state: watch::Receiver<bool>,
}

impl Celebration {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            raised_at: None,
            #[cfg(feature = "async")]
            timer: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Raises the flag. Does nothing while a previous window is still open.
    pub fn raise(&mut self) {
        if self.is_active() {
            return;
        }
        self.raised_at = Some(Instant::now());

        #[cfg(feature = "async")]
        {
            if let Some(previous) = self.timer.take() {
                previous.token.cancel();
            }
            self.timer = self.spawn_auto_clear();
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Celebration raised for {:?}", self.window);
    }

    /// True while the window is open. The deadline always applies, so the
    /// flag still clears when the runtime holding the timer task is idle or
    /// gone; the timer can only clear it earlier.
    pub fn is_active(&self) -> bool {
        let within_window = self
            .raised_at
            .is_some_and(|raised| raised.elapsed() < self.window);

        #[cfg(feature = "async")]
        {
            if let Some(timer) = &self.timer {
                return within_window && *timer.state.borrow();
            }
        }

        within_window
    }

    /// Watch channel that turns `false` when the window closes.
    ///
    /// `None` when the flag was never raised or no tokio runtime was
    /// running when it was.
    #[cfg(feature = "async")]
    pub fn subscribe(&self) -> Option<watch::Receiver<bool>> {
        self.timer.as_ref().map(|timer| timer.state.clone())
    }

    #[cfg(feature = "async")]
    fn spawn_auto_clear(&self) -> Option<AutoClear> {
        let handle = tokio::runtime::Handle::try_current().ok()?;
        let (tx, rx) = watch::channel(true);
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let window = self.window;

        handle.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(window) => {
                    let _ = tx.send(false);
                    #[cfg(feature = "tracing")]
                    tracing::info!("Celebration cleared");
                }
            }
        });

        Some(AutoClear { token, state: rx })
    }
}

#[cfg(feature = "async")]
impl Drop for Celebration {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_active_until_raised() {
        let celebration = Celebration::new(Duration::from_secs(3));
        assert!(!celebration.is_active());
    }

    #[test]
    fn test_active_inside_window() {
        let mut celebration = Celebration::new(Duration::from_secs(3));
        celebration.raise();
        assert!(celebration.is_active());
    }

    #[test]
    fn test_zero_window_never_active() {
        let mut celebration = Celebration::new(Duration::ZERO);
        celebration.raise();
        assert!(!celebration.is_active());
    }

    #[test]
    fn test_deadline_expires() {
        let mut celebration = Celebration::new(Duration::from_millis(10));
        celebration.raise();
        std::thread::sleep(Duration::from_millis(30));
        assert!(!celebration.is_active());
    }
}
