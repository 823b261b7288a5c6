//! Entry preparation and editor launching
//!
//! Joins a parsed [`EntryPath`] onto the diary base directory, creates the
//! missing directories, and hands the result to an editor whose working
//! directory is the diary root.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::entry::EntryPath;
use crate::error::{Error, Result};

/// Join an entry onto the base directory and make sure it can be opened.
///
/// Directory entries are created in full; for file entries the parent
/// directories are created and the configured extension is appended to the
/// final segment. The file itself is left for the editor to create. Nothing is
/// touched on disk if the extension is rejected.
pub fn prepare(entry: &EntryPath, base_dir: &Path, file_ext: &str) -> Result<PathBuf> {
    let full_path = base_dir.join(&entry.path);

    if entry.is_dir {
        fs::create_dir_all(&full_path)?;
        return Ok(full_path);
    }

    let full_path = apply_extension(full_path, file_ext)?;
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(full_path)
}

/// Append the entry file extension, rejecting one that does not start with a dot
fn apply_extension(path: PathBuf, file_ext: &str) -> Result<PathBuf> {
    if !file_ext.starts_with('.') {
        return Err(Error::InvalidExtension(file_ext.to_string()));
    }

    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(file_ext);
    Ok(path.with_file_name(name))
}

/// Pick the editor command: explicit configuration wins, then $VISUAL and
/// $EDITOR, then plain `vi`.
pub fn editor_command(configured: Option<&str>) -> String {
    if let Some(editor) = configured {
        return editor.to_string();
    }

    std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string())
}

/// Run the editor on the entry path with the diary base directory as its
/// working directory, so relative commands inside the editor stay in the diary.
pub fn open_in_editor(path: &Path, base_dir: &Path, editor: &str) -> Result<()> {
    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| Error::Editor("empty editor command".to_string()))?;

    let status = Command::new(program)
        .args(words)
        .arg(path)
        .current_dir(base_dir)
        .status()?;

    if !status.success() {
        return Err(Error::Editor(format!("{} exited with {}", program, status)));
    }
    Ok(())
}
