// ── Document state ────────────────────────────────────────────────────────────
//
// Per-document language bookkeeping for the editor shell.  Untitled documents
// are numbered by a `DocumentCounter` the caller owns; there is no global.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    detect::Classifier,
    languages::{language_for_extension, LanguageId},
    session::TabEntry,
};

/// Hands out the `new N` names of untitled documents, starting at 1.
#[derive(Debug, Default)]
pub struct DocumentCounter {
    issued: u32,
}

impl DocumentCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&mut self) -> String {
        self.issued += 1;
        format!("new {}", self.issued)
    }
}

/// One open document, as far as language selection and the session care.
#[derive(Debug, Clone)]
pub struct Document {
    /// Absolute path on disk, or `None` for an untitled buffer.
    pub path: Option<PathBuf>,
    pub file_name: String,
    /// `true` when the buffer has unsaved changes.
    pub modified: bool,
    pub language: LanguageId,
    /// Re-run content detection when the extension gives no language.
    pub auto_detect_language: bool,
    /// Encoding label, e.g. `"UTF-8-BOM"`.
    pub encoding: String,
    /// EOL label, e.g. `"LF"`.
    pub eol: String,
    pub caret_offset: usize,
    pub scroll_x: f64,
    pub scroll_y: f64,
    font_size: f64,
}

impl Document {
    pub const DEFAULT_FONT_SIZE: f64 = 14.0;
    pub const MIN_FONT_SIZE: f64 = 6.0;
    pub const MAX_FONT_SIZE: f64 = 72.0;
    pub const DEFAULT_ENCODING: &'static str = "UTF-8";
    pub const DEFAULT_EOL: &'static str = "CRLF";

    fn blank(path: Option<PathBuf>, file_name: String) -> Self {
        Self {
            path,
            file_name,
            modified: false,
            language: LanguageId::NormalText,
            auto_detect_language: true,
            encoding: Self::DEFAULT_ENCODING.to_owned(),
            eol: Self::DEFAULT_EOL.to_owned(),
            caret_offset: 0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            font_size: Self::DEFAULT_FONT_SIZE,
        }
    }

    /// A fresh, untitled, plain-text document.
    pub fn untitled(counter: &mut DocumentCounter) -> Self {
        Self::blank(None, counter.next_name())
    }

    /// A document loaded from `path`.  The extension decides the language;
    /// content detection fills in when the extension is unknown.
    pub fn open(path: impl Into<PathBuf>, content: &str, classifier: &Classifier) -> Self {
        let path = path.into();
        let file_name = file_name_of(&path);
        let language = language_for_extension(&path);
        let mut doc = Self::blank(Some(path), file_name);
        doc.language = language;
        doc.refresh_language(content, classifier);
        doc
    }

    /// Re-detect the language from `content` if this document has no
    /// extension-derived language and auto-detection is on.
    ///
    /// Returns `true` when the language changed.
    pub fn refresh_language(&mut self, content: &str, classifier: &Classifier) -> bool {
        if !self.auto_detect_language {
            return false;
        }
        let by_extension = self
            .path
            .as_deref()
            .map_or(LanguageId::NormalText, language_for_extension);
        if !by_extension.is_normal_text() {
            return false;
        }
        let detected = LanguageId::from(classifier.classify(content));
        if detected == self.language {
            return false;
        }
        debug!(file = %self.file_name, language = %detected, "content language changed");
        self.language = detected;
        true
    }

    /// Select a language by hand; content detection stops for this document.
    pub fn set_language(&mut self, language: LanguageId) {
        self.language = language;
        self.auto_detect_language = false;
    }

    /// Point the document at a new path (Save As) and re-derive the name.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.file_name = file_name_of(&path);
        self.path = Some(path);
    }

    /// Tab / window title: the file name, with ` *` when modified.
    pub fn title(&self) -> String {
        if self.modified {
            format!("{} *", self.file_name)
        } else {
            self.file_name.clone()
        }
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Set the zoom level, clamped to the supported range.
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size.clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
    }

    /// Session record for this document.  Buffer content is kept only for
    /// untitled or modified documents; the rest reload from disk.
    pub fn to_tab_entry(&self, content: &str) -> TabEntry {
        let keep_content = self.path.is_none() || self.modified;
        TabEntry {
            path: self
                .path
                .as_deref()
                .map(|p| p.to_string_lossy().into_owned()),
            file_name: self.file_name.clone(),
            content: keep_content.then(|| content.to_owned()),
            modified: self.modified,
            caret_offset: self.caret_offset,
            scroll_x: self.scroll_x,
            scroll_y: self.scroll_y,
            font_size: self.font_size,
            language: self.language.clone(),
            encoding: self.encoding.clone(),
            eol: self.eol.clone(),
            auto_detect_language: self.auto_detect_language,
        }
    }

    /// Rebuild a document from its session record.
    pub fn from_tab_entry(entry: &TabEntry) -> Self {
        let mut doc = Self {
            path: entry.path.as_deref().map(PathBuf::from),
            file_name: entry.file_name.clone(),
            modified: entry.modified,
            language: entry.language.clone(),
            auto_detect_language: entry.auto_detect_language,
            encoding: entry.encoding.clone(),
            eol: entry.eol.clone(),
            caret_offset: entry.caret_offset,
            scroll_x: entry.scroll_x,
            scroll_y: entry.scroll_y,
            font_size: Self::DEFAULT_FONT_SIZE,
        };
        if doc.file_name.is_empty() {
            if let Some(path) = &doc.path {
                doc.file_name = file_name_of(path);
            }
        }
        doc.set_font_size(entry.font_size);
        doc
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::Language;

    #[test]
    fn untitled_names_count_up_per_counter() {
        let mut counter = DocumentCounter::new();
        assert_eq!(Document::untitled(&mut counter).file_name, "new 1");
        assert_eq!(Document::untitled(&mut counter).file_name, "new 2");

        // A second counter (e.g. a second window) starts over.
        let mut other = DocumentCounter::new();
        assert_eq!(Document::untitled(&mut other).file_name, "new 1");
    }

    #[test]
    fn extension_beats_content() {
        let doc = Document::open(
            "/tmp/data.json",
            "def main():\n    print('not json')\n",
            &Classifier::default(),
        );
        assert_eq!(doc.language, LanguageId::Known(Language::Json));
        assert_eq!(doc.file_name, "data.json");
    }

    #[test]
    fn unknown_extension_falls_back_to_content() {
        let doc = Document::open(
            "/tmp/script",
            "#!/usr/bin/env python3\nprint('hi')\n",
            &Classifier::default(),
        );
        assert_eq!(doc.language, LanguageId::Known(Language::Python));
    }

    #[test]
    fn manual_choice_disables_detection() {
        let classifier = Classifier::default();
        let mut doc = Document::untitled(&mut DocumentCounter::new());
        doc.set_language(LanguageId::Known(Language::Ini));
        assert!(!doc.refresh_language(r#"{"a": 1}"#, &classifier));
        assert_eq!(doc.language, LanguageId::Known(Language::Ini));
    }

    #[test]
    fn refresh_reports_changes() {
        let classifier = Classifier::default();
        let mut doc = Document::untitled(&mut DocumentCounter::new());
        assert!(doc.refresh_language(r#"{"a": 1}"#, &classifier));
        assert!(!doc.refresh_language(r#"{"a": 2}"#, &classifier));
        assert!(doc.refresh_language("", &classifier));
        assert!(doc.language.is_normal_text());
    }

    #[test]
    fn title_marks_modified() {
        let mut doc = Document::untitled(&mut DocumentCounter::new());
        assert_eq!(doc.title(), "new 1");
        doc.modified = true;
        assert_eq!(doc.title(), "new 1 *");
    }

    #[test]
    fn font_size_is_clamped() {
        let mut doc = Document::untitled(&mut DocumentCounter::new());
        doc.set_font_size(200.0);
        assert_eq!(doc.font_size(), Document::MAX_FONT_SIZE);
        doc.set_font_size(1.0);
        assert_eq!(doc.font_size(), Document::MIN_FONT_SIZE);
    }

    #[test]
    fn tab_entry_keeps_content_only_when_needed() {
        let classifier = Classifier::default();
        let saved = Document::open("/tmp/a.cs", "class A {}", &classifier);
        assert_eq!(saved.to_tab_entry("class A {}").content, None);

        let mut counter = DocumentCounter::new();
        let untitled = Document::untitled(&mut counter);
        assert_eq!(
            untitled.to_tab_entry("scratch").content.as_deref(),
            Some("scratch")
        );
    }

    #[test]
    fn tab_entry_restores_document() {
        let classifier = Classifier::default();
        let mut doc = Document::open("/tmp/a.cs", "", &classifier);
        doc.modified = true;
        doc.set_font_size(20.0);
        let restored = Document::from_tab_entry(&doc.to_tab_entry("x"));
        assert_eq!(restored.path, doc.path);
        assert_eq!(restored.language, LanguageId::Known(Language::CSharp));
        assert!(restored.modified);
        assert_eq!(restored.font_size(), 20.0);
    }

    #[test]
    fn tab_entry_survives_restore_and_save() {
        let entry = TabEntry {
            path: Some("/tmp/notes.md".to_owned()),
            file_name: "notes.md".to_owned(),
            content: Some("# draft".to_owned()),
            modified: true,
            caret_offset: 42,
            scroll_x: 3.0,
            scroll_y: 100.0,
            font_size: 18.0,
            language: LanguageId::Known(Language::Markdown),
            encoding: "UTF-8-BOM".to_owned(),
            eol: "LF".to_owned(),
            auto_detect_language: false,
        };
        let doc = Document::from_tab_entry(&entry);
        assert_eq!(doc.encoding, "UTF-8-BOM");
        assert_eq!(doc.eol, "LF");
        assert_eq!(doc.to_tab_entry("# draft"), entry);
    }

    #[test]
    fn save_as_renames_and_keeps_language() {
        let classifier = Classifier::default();
        let mut doc = Document::untitled(&mut DocumentCounter::new());
        doc.refresh_language(r#"{"a": 1}"#, &classifier);
        doc.modified = true;

        doc.set_path("/tmp/out/config.json");
        assert_eq!(doc.file_name, "config.json");
        assert_eq!(doc.path.as_deref(), Some(Path::new("/tmp/out/config.json")));
        assert_eq!(doc.language.language(), Some(Language::Json));
        // A saved, unmodified document no longer carries its buffer.
        doc.modified = false;
        assert_eq!(doc.to_tab_entry("{}").content, None);
    }
}
