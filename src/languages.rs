// ── Language identifiers & display names ──────────────────────────────────────
//
// Maps file paths to highlighting-definition names, and definition names to
// the human-readable labels shown in the status bar and the language picker.
// No I/O; every lookup is total and falls back to the "Normal Text" sentinel.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::registry::{BuiltinRegistry, HighlightingRegistry};

/// The explicit "no language" value shown in place of an absent language.
pub const NORMAL_TEXT: &str = "Normal Text";

// ── Language enum ─────────────────────────────────────────────────────────────

/// Every language the classifier can report and the extension table can map
/// to.  The internal id (`Language::id`) is the editor's highlighting
/// definition name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// Also the consolidated bucket for Rust and Go content.
    Cpp,
    CSharp,
    Vb,
    Java,
    /// JavaScript and TypeScript share one definition.
    JavaScript,
    Python,
    Html,
    Xml,
    Css,
    Php,
    Tsql,
    Json,
    Markdown,
    PowerShell,
    /// Batch files; shell scripts are highlighted with the same definition.
    Batch,
    FSharp,
    Ini,
    Patch,
    Tex,
    AspXhtml,
    Boo,
    Coco,
}

impl Language {
    pub const ALL: [Language; 22] = [
        Language::Cpp,
        Language::CSharp,
        Language::Vb,
        Language::Java,
        Language::JavaScript,
        Language::Python,
        Language::Html,
        Language::Xml,
        Language::Css,
        Language::Php,
        Language::Tsql,
        Language::Json,
        Language::Markdown,
        Language::PowerShell,
        Language::Batch,
        Language::FSharp,
        Language::Ini,
        Language::Patch,
        Language::Tex,
        Language::AspXhtml,
        Language::Boo,
        Language::Coco,
    ];

    /// Highlighting-definition name used by the embedded editor.
    pub fn id(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Vb => "VB",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Html => "HTML",
            Language::Xml => "XML",
            Language::Css => "CSS",
            Language::Php => "PHP",
            Language::Tsql => "TSQL",
            Language::Json => "JSON",
            Language::Markdown => "MarkDown",
            Language::PowerShell => "PowerShell",
            Language::Batch => "BAT",
            Language::FSharp => "F#",
            Language::Ini => "INI",
            Language::Patch => "Patch",
            Language::Tex => "TeX",
            Language::AspXhtml => "ASP/XHTML",
            Language::Boo => "Boo",
            Language::Coco => "Coco",
        }
    }

    /// Human-readable name for the status bar.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Cpp => "C / C++",
            Language::CSharp => "C#",
            Language::Vb => "VB.NET",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript / TypeScript",
            Language::Python => "Python",
            Language::Html => "HTML",
            Language::Xml => "XML / XAML",
            Language::Css => "CSS / SCSS",
            Language::Php => "PHP",
            Language::Tsql => "SQL",
            Language::Json => "JSON",
            Language::Markdown => "Markdown",
            Language::PowerShell => "PowerShell",
            Language::Batch => "Batch",
            Language::FSharp => "F#",
            Language::Ini => "INI",
            Language::Patch => "Diff / Patch",
            Language::Tex => "TeX / LaTeX",
            Language::AspXhtml => "ASP.NET",
            Language::Boo => "Boo",
            Language::Coco => "Coco/R",
        }
    }

    /// Case-insensitive lookup by highlighting-definition name.
    pub fn from_id(id: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ── LanguageId ────────────────────────────────────────────────────────────────

/// The language a document is highlighted with, as stored by the shell.
///
/// Serialized as a bare string: the definition name, or `"Normal Text"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageId {
    #[default]
    NormalText,
    Known(Language),
    /// A registry definition with no entry in the static tables.
    Definition(String),
}

impl LanguageId {
    /// Classify a definition name.  Empty names and the sentinel itself map
    /// to `NormalText`.
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() || name.eq_ignore_ascii_case(NORMAL_TEXT) {
            return LanguageId::NormalText;
        }
        match Language::from_id(name) {
            Some(lang) => LanguageId::Known(lang),
            None => LanguageId::Definition(name.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LanguageId::NormalText => NORMAL_TEXT,
            LanguageId::Known(lang) => lang.id(),
            LanguageId::Definition(name) => name,
        }
    }

    /// Name of the highlighting definition to load, `None` for plain text.
    pub fn definition_name(&self) -> Option<&str> {
        match self {
            LanguageId::NormalText => None,
            other => Some(other.as_str()),
        }
    }

    pub fn language(&self) -> Option<Language> {
        match self {
            LanguageId::Known(lang) => Some(*lang),
            _ => None,
        }
    }

    pub fn is_normal_text(&self) -> bool {
        matches!(self, LanguageId::NormalText)
    }

    pub fn display_name(&self) -> &str {
        display_name(self.as_str())
    }
}

impl From<Language> for LanguageId {
    fn from(lang: Language) -> Self {
        LanguageId::Known(lang)
    }
}

impl From<Option<Language>> for LanguageId {
    fn from(lang: Option<Language>) -> Self {
        lang.map_or(LanguageId::NormalText, LanguageId::Known)
    }
}

impl From<String> for LanguageId {
    fn from(name: String) -> Self {
        LanguageId::from_name(&name)
    }
}

impl From<LanguageId> for String {
    fn from(id: LanguageId) -> Self {
        match id {
            LanguageId::Definition(name) => name,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ── Display names ─────────────────────────────────────────────────────────────

/// Display name for a definition name.  Unknown names pass through unchanged;
/// the empty name shows as "Normal Text".
pub fn display_name(id: &str) -> &str {
    if id.is_empty() {
        return NORMAL_TEXT;
    }
    match Language::from_id(id) {
        Some(lang) => lang.display_name(),
        None => id,
    }
}

// ── Extension lookup ──────────────────────────────────────────────────────────

/// The extension of `path` as the shell sees it: everything after the last
/// dot of the file name, so `.editorconfig` yields `editorconfig`.
fn extension_of(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let dot = name.rfind('.')?;
    let ext = &name[dot + 1..];
    (!ext.is_empty()).then_some(ext)
}

/// Static extension table; consulted before the editor registry.
fn static_language(ext: &str) -> Option<Language> {
    let ext = ext.to_ascii_lowercase();
    let lang = match ext.as_str() {
        "c" | "h" | "cpp" | "cxx" | "cc" | "hpp" | "hxx" => Language::Cpp,
        "cs" => Language::CSharp,
        "vb" => Language::Vb,
        "java" => Language::Java,
        "js" | "jsx" | "mjs" | "ts" | "tsx" => Language::JavaScript,
        "py" | "pyw" | "pyx" => Language::Python,
        "html" | "htm" | "shtml" | "vue" | "svelte" => Language::Html,
        "xml" | "xaml" | "xsl" | "xslt" | "xsd" | "config" | "csproj" | "vbproj" | "fsproj"
        | "sln" | "props" | "targets" | "nuspec" | "resx" | "svg" => Language::Xml,
        // No YAML definition ships with the editor; XML colouring is closest.
        "yml" | "yaml" => Language::Xml,
        "css" | "scss" | "less" | "sass" => Language::Css,
        "php" | "php3" | "php4" | "php5" | "phtml" => Language::Php,
        "sql" => Language::Tsql,
        "json" | "jsonc" => Language::Json,
        "md" | "markdown" | "mdown" => Language::Markdown,
        "ps1" | "psm1" | "psd1" => Language::PowerShell,
        "bat" | "cmd" => Language::Batch,
        "fs" | "fsi" | "fsx" => Language::FSharp,
        "ini" | "cfg" | "conf" => Language::Ini,
        "patch" | "diff" => Language::Patch,
        "tex" | "latex" | "sty" | "cls" => Language::Tex,
        "asp" | "aspx" => Language::AspXhtml,
        "boo" => Language::Boo,
        "atg" => Language::Coco,
        _ => return None,
    };
    Some(lang)
}

/// Language for `path` by extension, consulting the static table first and
/// then `registry`.  Returns `LanguageId::NormalText` when neither knows it.
pub fn language_for_extension_in(
    path: impl AsRef<Path>,
    registry: &dyn HighlightingRegistry,
) -> LanguageId {
    let Some(ext) = extension_of(path.as_ref()) else {
        return LanguageId::NormalText;
    };
    if let Some(lang) = static_language(ext) {
        return LanguageId::Known(lang);
    }
    registry
        .definition_by_extension(ext)
        .map_or(LanguageId::NormalText, LanguageId::from_name)
}

/// [`language_for_extension_in`] against the editor's stock definitions.
pub fn language_for_extension(path: impl AsRef<Path>) -> LanguageId {
    language_for_extension_in(path, &BuiltinRegistry)
}

/// Display name for the language of `path`, e.g. `"C / C++"` for `main.cpp`.
pub fn display_name_for_path(path: impl AsRef<Path>) -> String {
    language_for_extension(path).display_name().to_owned()
}

// ── Picker list ───────────────────────────────────────────────────────────────

/// Every language the picker offers as `(display name, definition name)`.
///
/// The first entry is always `("Normal Text", None)`; the rest follow in
/// alphabetical order of display name.
pub fn list_all_languages_in(
    registry: &dyn HighlightingRegistry,
) -> Vec<(String, Option<String>)> {
    let mut entries: Vec<(String, Option<String>)> = registry
        .definition_names()
        .into_iter()
        .map(|name| (display_name(name).to_owned(), Some(name.to_owned())))
        .collect();
    entries.sort_by(|(a, a_id), (b, b_id)| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a_id.cmp(b_id))
    });

    let mut languages = Vec::with_capacity(entries.len() + 1);
    languages.push((NORMAL_TEXT.to_owned(), None));
    languages.extend(entries);
    languages
}

/// [`list_all_languages_in`] over the editor's stock definitions.
pub fn list_all_languages() -> Vec<(String, Option<String>)> {
    list_all_languages_in(&BuiltinRegistry)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
