// ── Recent files ──────────────────────────────────────────────────────────────
//
// `<settings dir>/recent_files.json`: a JSON array of paths, newest first.
// Read and write failures are swallowed; the menu just shows fewer entries.

use std::{fs, path::Path};

use tracing::debug;

use crate::error::Result;

/// Longest list kept on disk and shown in the File menu.
pub const MAX_RECENT_FILES: usize = 15;

/// Files larger than this are treated as corrupt and ignored.
const MAX_FILE_BYTES: u64 = 1024 * 1024;

const RECENT_FILE: &str = "recent_files.json";

fn read(path: &Path) -> Result<Vec<String>> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

/// Load the list from `dir`; empty on any failure.
pub fn load(dir: &Path) -> Vec<String> {
    let path = dir.join(RECENT_FILE);
    match fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_FILE_BYTES => {
            debug!(bytes = meta.len(), "recent-files list too large, ignoring");
            return Vec::new();
        }
        Ok(_) => {}
        Err(_) => return Vec::new(),
    }
    read(&path).unwrap_or_else(|e| {
        debug!(error = %e, "recent-files list unreadable");
        Vec::new()
    })
}

fn write(dir: &Path, files: &[String]) -> Result<()> {
    fs::create_dir_all(dir)?;
    let file = fs::File::create(dir.join(RECENT_FILE))?;
    serde_json::to_writer_pretty(file, files)?;
    Ok(())
}

/// Store `files` in `dir`, dropping any error.
pub fn save(dir: &Path, files: &[String]) {
    if let Err(e) = write(dir, files) {
        debug!(error = %e, "recent-files list not saved");
    }
}

/// Move `path` to the front of the list (adding it if new), trim the list to
/// [`MAX_RECENT_FILES`], save, and return the new list.
///
/// Paths compare case-insensitively.
pub fn add(dir: &Path, path: &str) -> Vec<String> {
    let mut files = load(dir);
    let key = path.to_lowercase();
    files.retain(|f| f.to_lowercase() != key);
    files.insert(0, path.to_owned());
    files.truncate(MAX_RECENT_FILES);
    save(dir, &files);
    files
}

/// Empty the list on disk.
pub fn clear(dir: &Path) {
    save(dir, &[]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_puts_newest_first() {
        let dir = tempfile::tempdir().expect("tempdir");
        add(dir.path(), "a.txt");
        let files = add(dir.path(), "b.txt");
        assert_eq!(files, vec!["b.txt", "a.txt"]);
        assert_eq!(load(dir.path()), files);
    }

    #[test]
    fn re_adding_moves_to_front_case_insensitively() {
        let dir = tempfile::tempdir().expect("tempdir");
        add(dir.path(), "C:\\Notes.txt");
        add(dir.path(), "C:\\other.txt");
        let files = add(dir.path(), "c:\\notes.TXT");
        assert_eq!(files, vec!["c:\\notes.TXT", "C:\\other.txt"]);
    }

    #[test]
    fn list_is_capped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut files = Vec::new();
        for i in 0..20 {
            files = add(dir.path(), &format!("file{i}.txt"));
        }
        assert_eq!(files.len(), MAX_RECENT_FILES);
        assert_eq!(files[0], "file19.txt");
    }

    #[test]
    fn clear_empties_the_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        add(dir.path(), "a.txt");
        clear(dir.path());
        assert!(load(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_or_missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load(dir.path()).is_empty());
        fs::write(dir.path().join(RECENT_FILE), "not json").expect("write");
        assert!(load(dir.path()).is_empty());
    }

    #[test]
    fn oversized_file_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let big = format!("[\"{}\"]", "x".repeat(MAX_FILE_BYTES as usize + 1));
        fs::write(dir.path().join(RECENT_FILE), big).expect("write");
        assert!(load(dir.path()).is_empty());
    }
}
