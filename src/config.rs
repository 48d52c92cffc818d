// ── Configuration ─────────────────────────────────────────────────────────────
//
// Classifier tunables and the settings directory shared by the persistence
// collaborators.  Every field has a default, so a partial JSON file is valid.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::error::{HiliteError, Result};

/// Tunables for [`crate::Classifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Maximum number of characters read from the start of a document.
    pub sample_cap: usize,
    /// Minimum winning score for a confident verdict.
    pub min_score: i32,
    /// Wall-clock budget for a single pattern evaluation, in milliseconds.
    pub eval_budget_ms: u64,
}

impl ClassifierConfig {
    pub const DEFAULT_SAMPLE_CAP: usize = 4000;
    pub const DEFAULT_MIN_SCORE: i32 = 3;
    pub const DEFAULT_EVAL_BUDGET_MS: u64 = 1000;

    pub fn eval_budget(&self) -> Duration {
        Duration::from_millis(self.eval_budget_ms)
    }

    /// Reject values that would make every classification meaningless.
    pub fn validate(self) -> Result<Self> {
        if self.sample_cap == 0 {
            return Err(HiliteError::Config {
                message: "sample_cap must be at least 1".to_owned(),
            });
        }
        if self.eval_budget_ms == 0 {
            return Err(HiliteError::Config {
                message: "eval_budget_ms must be at least 1".to_owned(),
            });
        }
        Ok(self)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sample_cap: Self::DEFAULT_SAMPLE_CAP,
            min_score: Self::DEFAULT_MIN_SCORE,
            eval_budget_ms: Self::DEFAULT_EVAL_BUDGET_MS,
        }
    }
}

/// Directory holding `session.json` and `recent_files.json`:
/// `<platform config dir>/hilite`.
///
/// Returns `None` if the platform has no notion of a config directory.
pub fn settings_dir() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("hilite");
    Some(p)
}
