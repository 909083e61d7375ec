//! Clipboard seam for copying the current password.
//!
//! The crate never talks to a system clipboard itself; the rendering layer
//! supplies a [`ClipboardWriter`]. Failures are reported back as a
//! non-fatal notice and never abort the session.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard access was denied")]
    PermissionDenied,
    #[error("Clipboard is not available in this environment")]
    Unsupported,
    #[error("Clipboard write failed: {0}")]
    Failed(String),
}

pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Outcome of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// No password was held, nothing was written.
    NothingToCopy,
    /// The write failed; `notice` is meant to be shown to the user.
    Failed { notice: String },
}

/// Clipboard that accepts nothing. Useful for headless environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl ClipboardWriter for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

/// Writes `text` and folds any error into a [`CopyOutcome`].
pub fn copy_text<C: ClipboardWriter + ?Sized>(clipboard: &mut C, text: &str) -> CopyOutcome {
    if text.is_empty() {
        return CopyOutcome::NothingToCopy;
    }
    match clipboard.write_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Clipboard write failed: {}", e);
            CopyOutcome::Failed {
                notice: format!("Could not copy the password: {}", e),
            }
        }
    }
}
