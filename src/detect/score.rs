// ── Scorer & verdict selector ─────────────────────────────────────────────────

use crate::{error::Result, languages::Language};

use super::rules::{Probe, RuleSet};

/// Per-call accumulator from language to score, in first-insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ScoreMap {
    entries: Vec<(Language, i32)>,
}

impl ScoreMap {
    /// Add `score` to `lang`, inserting the entry if absent.
    pub(crate) fn add(&mut self, lang: Language, score: i32) {
        match self.entries.iter_mut().find(|(l, _)| *l == lang) {
            Some((_, total)) => *total += score,
            None => self.entries.push((lang, score)),
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, lang: Language) -> Option<i32> {
        self.entries
            .iter()
            .find(|(l, _)| *l == lang)
            .map(|(_, score)| *score)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-scoring entry.  Ties go to the entry inserted first.
    pub(crate) fn best(&self) -> Option<(Language, i32)> {
        let mut best: Option<(Language, i32)> = None;
        for &(lang, score) in &self.entries {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((lang, score));
            }
        }
        best
    }
}

/// Run every rule set over the probe's sample.
///
/// A set whose total is not positive leaves the map untouched; sets sharing a
/// key add into one entry.  The first budget overrun aborts with an error and
/// the partial map is dropped.
pub(crate) fn score(sets: &[RuleSet], probe: &Probe<'_>) -> Result<ScoreMap> {
    let mut scores = ScoreMap::default();
    for set in sets {
        let total = set.score(probe)?;
        if total > 0 {
            scores.add(set.key, total);
        }
    }
    Ok(scores)
}

/// The confident winner, or `None` when the map is empty or the top score is
/// below `min_score`.
pub(crate) fn select(scores: &ScoreMap, min_score: i32) -> Option<Language> {
    if scores.is_empty() {
        return None;
    }
    let (lang, top) = scores.best()?;
    (top >= min_score).then_some(lang)
}
