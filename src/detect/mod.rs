// ── Content-based language classification ─────────────────────────────────────
//
// Pipeline: sample → shortcut detectors → scorer → verdict selector.
// Pure and synchronous; all per-call state lives on the stack of `classify`.

mod rules;
mod score;
mod shortcut;
mod signatures;

use tracing::{debug, trace, warn};

use crate::{config::ClassifierConfig, error::Result, languages::Language};

use self::{rules::Probe, shortcut::Shortcut};

// ── Sample ────────────────────────────────────────────────────────────────────

/// Bounded prefix of a document, split into lines.
#[derive(Debug)]
pub(crate) struct Sample<'a> {
    /// At most `sample_cap` characters from the start of the input.
    pub(crate) text: &'a str,
    /// `text` split on `'\n'`; a trailing `'\r'` stays on its line.
    pub(crate) lines: Vec<&'a str>,
    /// First line, trimmed.
    pub(crate) first_line: &'a str,
}

impl<'a> Sample<'a> {
    pub(crate) fn new(content: &'a str, cap: usize) -> Self {
        // `nth` stops at the cap, so large documents are never walked in full.
        let text = match content.char_indices().nth(cap) {
            Some((end, _)) => &content[..end],
            None => content,
        };
        let lines: Vec<&str> = text.split('\n').collect();
        let first_line = lines.first().map_or("", |l| l.trim());
        Self {
            text,
            lines,
            first_line,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

// ── Classifier ────────────────────────────────────────────────────────────────

/// Guesses the language of a document from its text alone.
///
/// Holds only configuration; the signature tables are shared statics, so a
/// `Classifier` can be copied freely and used from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Best-guess language of `content`, or `None` when no language scores
    /// confidently.
    ///
    /// A pattern evaluation that overruns the time budget aborts the whole
    /// call with `None`; no partial score is ever used.
    pub fn classify(&self, content: &str) -> Option<Language> {
        match self.try_classify(content) {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(error = %e, "classification aborted");
                None
            }
        }
    }

    fn try_classify(&self, content: &str) -> Result<Option<Language>> {
        let sample = Sample::new(content, self.config.sample_cap);
        if sample.is_blank() {
            return Ok(None);
        }

        match shortcut::from_shebang(sample.first_line) {
            Shortcut::Verdict(lang) => {
                debug!(?lang, "shebang verdict");
                return Ok(Some(lang));
            }
            // Final: rule scoring is skipped, not just the shebang verdict.
            Shortcut::Abstain => {
                debug!(line = sample.first_line, "shebang interpreter without rules");
                return Ok(None);
            }
            Shortcut::Continue => {}
        }

        if let Some(lang) = shortcut::from_header(sample.first_line, sample.text) {
            debug!(?lang, "header verdict");
            return Ok(Some(lang));
        }

        let probe = Probe::new(&sample, self.config.eval_budget());
        let scores = score::score(signatures::rule_sets(), &probe)?;
        trace!(?scores, "scored sample");

        let verdict = score::select(&scores, self.config.min_score);
        debug!(?verdict, "scored verdict");
        Ok(verdict)
    }
}

/// Classify `content` with the default configuration.
pub fn classify(content: &str) -> Option<Language> {
    Classifier::default().classify(content)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
