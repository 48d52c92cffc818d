// ── Shortcut detectors ────────────────────────────────────────────────────────
//
// First-line checks that settle the verdict before any scoring runs.

use crate::languages::Language;

/// Outcome of the shebang check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shortcut {
    Verdict(Language),
    /// A recognized interpreter with no signature rules (Ruby, Perl).
    /// Classification stops with no verdict.
    Abstain,
    /// Not a shebang, or an unrecognized interpreter.
    Continue,
}

/// Map a `#!` line to a language by interpreter substring.
pub(crate) fn from_shebang(first_line: &str) -> Shortcut {
    if !first_line.starts_with("#!") {
        return Shortcut::Continue;
    }
    let shebang = first_line.to_lowercase();
    let has = |needle: &str| shebang.contains(needle);

    if has("python") {
        Shortcut::Verdict(Language::Python)
    } else if has("node") || has("deno") || has("bun") {
        Shortcut::Verdict(Language::JavaScript)
    } else if has("bash") || has("/sh") {
        Shortcut::Verdict(Language::Batch)
    } else if has("ruby") || has("perl") {
        Shortcut::Abstain
    } else if has("php") {
        Shortcut::Verdict(Language::Php)
    } else if has("pwsh") || has("powershell") {
        Shortcut::Verdict(Language::PowerShell)
    } else {
        Shortcut::Continue
    }
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Recognize document headers: XML declarations, HTML doctypes, PHP open
/// tags, LaTeX preambles and unified-diff headers.
pub(crate) fn from_header(first_line: &str, sample: &str) -> Option<Language> {
    if starts_with_ignore_case(first_line, "<?xml") {
        return Some(Language::Xml);
    }
    if starts_with_ignore_case(first_line, "<!DOCTYPE html")
        || starts_with_ignore_case(first_line, "<html")
    {
        return Some(Language::Html);
    }
    if starts_with_ignore_case(first_line, "<?php") {
        return Some(Language::Php);
    }
    if first_line.starts_with("\\documentclass") || first_line.starts_with("\\usepackage") {
        return Some(Language::Tex);
    }
    if first_line.starts_with("diff --git")
        || (first_line.starts_with("---") && sample.contains("\n+++"))
    {
        return Some(Language::Patch);
    }
    None
}
