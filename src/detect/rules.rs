// ── Signature rules ───────────────────────────────────────────────────────────
//
// A rule is a check plus a signed weight; a rule set is the ordered rules for
// one score-map key.  Checks are immutable and evaluated through a `Probe`,
// which owns the sample and enforces the per-evaluation time budget.

use std::time::{Duration, Instant};

use regex::Regex;

use crate::{
    error::{HiliteError, Result},
    languages::Language,
};

use super::Sample;

// ── Probe ─────────────────────────────────────────────────────────────────────

/// Read-only view of one sample plus the evaluation budget.
pub(crate) struct Probe<'s> {
    sample: &'s Sample<'s>,
    budget: Duration,
}

impl<'s> Probe<'s> {
    pub(crate) fn new(sample: &'s Sample<'s>, budget: Duration) -> Self {
        Self { sample, budget }
    }

    fn is_match(&self, pattern: &Regex, text: &str) -> Result<bool> {
        let start = Instant::now();
        let hit = pattern.is_match(text);
        self.within_budget(pattern, start)?;
        Ok(hit)
    }

    fn count(&self, pattern: &Regex, text: &str) -> Result<usize> {
        let start = Instant::now();
        let n = pattern.find_iter(text).count();
        self.within_budget(pattern, start)?;
        Ok(n)
    }

    fn within_budget(&self, pattern: &Regex, start: Instant) -> Result<()> {
        let elapsed = start.elapsed();
        if elapsed > self.budget {
            return Err(HiliteError::Timeout {
                pattern: pattern.as_str().to_owned(),
                elapsed,
            });
        }
        Ok(())
    }
}

// ── Checks ────────────────────────────────────────────────────────────────────

/// How a line is trimmed before a per-line pattern is applied.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Trim {
    None,
    Start,
    Both,
}

impl Trim {
    fn apply(self, line: &str) -> &str {
        match self {
            Trim::None => line,
            Trim::Start => line.trim_start(),
            Trim::Both => line.trim(),
        }
    }
}

/// A boolean test over a sample.
#[derive(Debug)]
pub(crate) enum Check {
    /// The pattern matches somewhere in the sample.
    Pattern(Regex),
    /// The sample contains any of the literals.
    Literal(&'static [&'static str]),
    /// Every inner check passes.
    All(Vec<Check>),
    Not(Box<Check>),
    /// The pattern matches at least `min` times (non-overlapping).
    Count { pattern: Regex, min: usize },
    /// At least `min` lines match once trimmed.
    Lines {
        pattern: Regex,
        trim: Trim,
        min: usize,
    },
}

impl Check {
    pub(crate) fn eval(&self, probe: &Probe<'_>) -> Result<bool> {
        let text = probe.sample.text;
        match self {
            Check::Pattern(pattern) => probe.is_match(pattern, text),
            Check::Literal(needles) => Ok(needles.iter().any(|n| text.contains(n))),
            Check::All(checks) => {
                for check in checks {
                    if !check.eval(probe)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Check::Not(check) => Ok(!check.eval(probe)?),
            Check::Count { pattern, min } => Ok(probe.count(pattern, text)? >= *min),
            Check::Lines { pattern, trim, min } => {
                let mut hits = 0;
                for line in &probe.sample.lines {
                    if probe.is_match(pattern, trim.apply(line))? {
                        hits += 1;
                        if hits >= *min {
                            return Ok(true);
                        }
                    }
                }
                Ok(false)
            }
        }
    }
}

// ── Rule sets ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct Rule {
    pub(crate) check: Check,
    pub(crate) weight: i32,
}

/// The weighted checks for one score-map key.
#[derive(Debug)]
pub(crate) struct RuleSet {
    /// Score-map entry this set contributes to.  Several sets may share one.
    pub(crate) key: Language,
    /// When present and failing, the set contributes nothing.
    pub(crate) guard: Option<Check>,
    pub(crate) rules: Vec<Rule>,
}

impl RuleSet {
    pub(crate) fn new(key: Language, rules: Vec<(Check, i32)>) -> Self {
        Self {
            key,
            guard: None,
            rules: rules
                .into_iter()
                .map(|(check, weight)| Rule { check, weight })
                .collect(),
        }
    }

    pub(crate) fn guarded_by(mut self, guard: Check) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Sum of the weights of every matching rule.
    pub(crate) fn score(&self, probe: &Probe<'_>) -> Result<i32> {
        if let Some(guard) = &self.guard {
            if !guard.eval(probe)? {
                return Ok(0);
            }
        }
        let mut total = 0;
        for rule in &self.rules {
            if rule.check.eval(probe)? {
                total += rule.weight;
            }
        }
        Ok(total)
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Compile a signature pattern.  Patterns are compile-time constants, covered
/// by `signatures::tests::all_rule_sets_compile`.
pub(crate) fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid signature pattern {pattern:?}: {e}"))
}

pub(crate) fn rx(pattern: &str) -> Check {
    Check::Pattern(regex(pattern))
}

pub(crate) fn lit(needles: &'static [&'static str]) -> Check {
    Check::Literal(needles)
}

pub(crate) fn all(checks: Vec<Check>) -> Check {
    Check::All(checks)
}

pub(crate) fn not(check: Check) -> Check {
    Check::Not(Box::new(check))
}

pub(crate) fn count(pattern: &str, min: usize) -> Check {
    Check::Count {
        pattern: regex(pattern),
        min,
    }
}

pub(crate) fn lines(pattern: &str, trim: Trim, min: usize) -> Check {
    Check::Lines {
        pattern: regex(pattern),
        trim,
        min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(check: &Check, content: &str) -> bool {
        let sample = Sample::new(content, 4000);
        let probe = Probe::new(&sample, Duration::from_secs(1));
        check.eval(&probe).expect("within budget")
    }

    #[test]
    fn literal_matches_any_needle() {
        let check = lit(&["===", "!=="]);
        assert!(eval(&check, "a !== b"));
        assert!(!eval(&check, "a != b"));
    }

    #[test]
    fn all_and_not_compose() {
        let check = all(vec![rx(r"\$\w+\s*="), not(lit(&["<?php"]))]);
        assert!(eval(&check, "$x = 1"));
        assert!(!eval(&check, "<?php $x = 1"));
    }

    #[test]
    fn count_needs_the_minimum() {
        let check = count(r"<\w+[\s/>]", 3);
        assert!(!eval(&check, "<a><b>"));
        assert!(eval(&check, "<a><b><c/>"));
    }

    #[test]
    fn lines_apply_trim_before_matching() {
        let check = lines(r"^#{1,6}\s+\w", Trim::Start, 2);
        assert!(eval(&check, "  # One\n## Two\n"));
        assert!(!eval(&check, "  # One\ntext\n"));
    }

    #[test]
    fn guard_zeroes_the_whole_set() {
        let set = RuleSet::new(Language::Json, vec![(lit(&["\"a\""]), 5)])
            .guarded_by(rx(r"^\s*[\{\[]"));
        let sample = Sample::new("x = \"a\"", 4000);
        let probe = Probe::new(&sample, Duration::from_secs(1));
        assert_eq!(set.score(&probe).expect("score"), 0);
    }

    #[test]
    fn negative_weights_subtract() {
        let set = RuleSet::new(Language::Xml, vec![(rx("xmlns"), 4), (rx("<html"), -10)]);
        let sample = Sample::new("<html xmlns=\"x\">", 4000);
        let probe = Probe::new(&sample, Duration::from_secs(1));
        assert_eq!(set.score(&probe).expect("score"), -6);
    }

    #[test]
    fn overrunning_the_budget_is_a_timeout() {
        let content = "word ".repeat(800);
        let sample = Sample::new(&content, 4000);
        let probe = Probe::new(&sample, Duration::ZERO);
        let err = rx(r"\b\w+\s+\w+\b").eval(&probe).unwrap_err();
        assert!(matches!(err, HiliteError::Timeout { .. }));
    }
}
