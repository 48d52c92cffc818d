// ── Session persistence ───────────────────────────────────────────────────────
//
// Reads and writes `<settings dir>/session.json`, keeping the previous file as
// `session.backup.json`.  Best effort throughout: callers get `None` or a
// silently dropped error and continue with a fresh session.

pub mod recent;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::Result, languages::LanguageId};

// ── On-disk types ─────────────────────────────────────────────────────────────

/// Root of the JSON session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    pub version: u32,
    #[serde(default)]
    pub tabs: Vec<TabEntry>,
    #[serde(default)]
    pub active_tab: usize,
    #[serde(default)]
    pub window: WindowGeometry,
    #[serde(default)]
    pub view: ViewOptions,
}

impl Default for SessionFile {
    fn default() -> Self {
        Self {
            version: SESSION_VERSION,
            tabs: Vec::new(),
            active_tab: 0,
            window: WindowGeometry::default(),
            view: ViewOptions::default(),
        }
    }
}

/// One entry per open tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabEntry {
    /// Absolute path to the file, or `None` for untitled buffers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub file_name: String,
    /// Buffer text, stored only for untitled or modified documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub modified: bool,
    pub caret_offset: usize,
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub font_size: f64,
    pub language: LanguageId,
    /// Encoding label, e.g. `"UTF-8"`.
    pub encoding: String,
    /// EOL label, e.g. `"CRLF"`.
    pub eol: String,
    pub auto_detect_language: bool,
}

impl Default for TabEntry {
    fn default() -> Self {
        Self {
            path: None,
            file_name: String::new(),
            content: None,
            modified: false,
            caret_offset: 0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            font_size: 14.0,
            language: LanguageId::NormalText,
            encoding: "UTF-8".to_owned(),
            eol: "CRLF".to_owned(),
            auto_detect_language: false,
        }
    }
}

/// Main-window placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub maximized: bool,
    pub always_on_top: bool,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            left: 100.0,
            top: 100.0,
            width: 1200.0,
            height: 750.0,
            maximized: false,
            always_on_top: false,
        }
    }
}

/// View toggles from the View menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub word_wrap: bool,
    pub show_whitespace: bool,
    pub show_end_of_line: bool,
    pub show_line_numbers: bool,
    pub show_indent_guide: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            word_wrap: false,
            show_whitespace: false,
            show_end_of_line: false,
            show_line_numbers: true,
            show_indent_guide: true,
        }
    }
}

// ── Format version ────────────────────────────────────────────────────────────

const SESSION_VERSION: u32 = 1;

const SESSION_FILE: &str = "session.json";
const BACKUP_FILE: &str = "session.backup.json";
const TEMP_FILE: &str = "session.json.tmp";

// ── Save ──────────────────────────────────────────────────────────────────────

/// Write the session into `dir`.
///
/// The new file is written to a temporary name first; the current
/// `session.json` is copied to `session.backup.json`; then the temporary file
/// replaces `session.json`.  Creates `dir` if needed.
pub fn save(dir: &Path, session: &SessionFile) -> Result<()> {
    fs::create_dir_all(dir)?;

    let temp = dir.join(TEMP_FILE);
    let primary = dir.join(SESSION_FILE);

    let file = fs::File::create(&temp)?;
    serde_json::to_writer_pretty(file, session)?;

    if primary.exists() {
        // Losing the backup is not worth failing the save over.
        if let Err(e) = fs::copy(&primary, dir.join(BACKUP_FILE)) {
            debug!(error = %e, "session backup skipped");
        }
    }

    fs::rename(&temp, &primary)?;
    Ok(())
}

/// [`save`] with any error logged and dropped.
pub fn save_best_effort(dir: &Path, session: &SessionFile) {
    if let Err(e) = save(dir, session) {
        debug!(error = %e, dir = %dir.display(), "session not saved");
    }
}

// ── Load ──────────────────────────────────────────────────────────────────────

fn read(path: &Path) -> Result<SessionFile> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

/// Read the session from `dir`.
///
/// Falls back to the backup when the primary file is missing or corrupt.
/// Returns `None` when neither parses, or the version is not recognised.
pub fn load(dir: &Path) -> Option<SessionFile> {
    let primary = dir.join(SESSION_FILE);
    let backup = dir.join(BACKUP_FILE);

    let session = match read(&primary) {
        Ok(session) => session,
        Err(e) => {
            debug!(error = %e, "primary session unreadable, trying backup");
            read(&backup).ok()?
        }
    };
    (session.version == SESSION_VERSION).then_some(session)
}

/// Delete both the session and its backup, ignoring failures.
pub fn clear(dir: &Path) {
    for name in [SESSION_FILE, BACKUP_FILE] {
        let _ = fs::remove_file(dir.join(name));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
