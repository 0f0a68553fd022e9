//! Workspace directory listing.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// List the files of `dir` that the file panel should show.
///
/// Non-recursive; hidden entries and directories are skipped. When
/// `extensions` is non-empty only matching files (case-insensitive) are
/// kept. Names are sorted case-insensitively.
pub fn scan_workspace(dir: &Path, extensions: &[String]) -> Result<Vec<String>> {
    let read_dir = fs::read_dir(dir)
        .with_context(|| format!("Failed to read workspace: {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in read_dir.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let is_file = entry.metadata().map(|m| m.is_file()).unwrap_or(false);
        if !is_file || !has_allowed_extension(&name, extensions) {
            continue;
        }
        names.push(name);
    }

    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    Ok(names)
}

fn has_allowed_extension(name: &str, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    let ext = match Path::new(name).extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return false,
    };
    extensions
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(&ext))
}
