// ── Central error type ────────────────────────────────────────────────────────
//
// Classification itself never fails: `Classifier::classify` recovers from
// `Timeout` locally and returns `None`.  The remaining variants come from the
// persistence collaborators, whose public entry points swallow them and fall
// back to defaults.

use std::time::Duration;

use thiserror::Error;

/// Every error that hilite can produce.
#[derive(Debug, Error)]
pub enum HiliteError {
    /// A single pattern evaluation ran longer than the configured budget.
    #[error("pattern {pattern:?} exceeded the evaluation budget ({elapsed:?})")]
    Timeout {
        /// Source text of the offending pattern.
        pattern: String,
        elapsed: Duration,
    },

    /// A standard I/O error (file open, read, write, …).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session, recent-files or config JSON could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl HiliteError {
    /// Process exit code used by the command-line front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 1,
            Self::Json(_) | Self::Config { .. } => 2,
            Self::Timeout { .. } => 3,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HiliteError>;
