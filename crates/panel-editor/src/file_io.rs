//! Document storage and read-only policy.
//!
//! The editor loads and saves through the [`Storage`] trait and asks a
//! [`ReadOnlyPolicy`] whether a document may be modified, so neither the
//! filesystem nor naming conventions are baked into the editing core.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bitworks_buffer::{EditError, LineBuffer};

/// Source and sink of document lines.
pub trait Storage {
    /// Load the lines of `name`; `NotFound` when it does not exist.
    fn load(&self, name: &str) -> Result<Vec<String>, EditError>;

    /// Store `lines` joined by line breaks under `name`.
    fn save(&self, name: &str, lines: &[String]) -> Result<(), EditError>;

    /// Whether the stored file itself is write-protected.
    fn is_protected(&self, name: &str) -> bool {
        let _ = name;
        false
    }
}

/// Decides whether a document may be modified, from its name alone.
pub trait ReadOnlyPolicy {
    fn is_read_only(&self, name: &str) -> bool;
}

impl<F> ReadOnlyPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn is_read_only(&self, name: &str) -> bool {
        self(name)
    }
}

/// Marks documents whose file name starts with one of the prefixes.
#[derive(Debug, Clone, Default)]
pub struct PrefixPolicy {
    prefixes: Vec<String>,
}

impl PrefixPolicy {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }
}

impl ReadOnlyPolicy for PrefixPolicy {
    fn is_read_only(&self, name: &str) -> bool {
        let file_name = path_to_title(Path::new(name));
        self.prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && file_name.starts_with(prefix.as_str()))
    }
}

/// Files in a workspace directory.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for FsStorage {
    fn load(&self, name: &str) -> Result<Vec<String>, EditError> {
        let path = self.resolve(name);
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => EditError::NotFound(name.to_string()),
            _ => EditError::Io {
                name: name.to_string(),
                message: e.to_string(),
            },
        })?;

        bitworks_logger::debug(format!("Loaded {} ({} bytes)", path.display(), content.len()));
        Ok(LineBuffer::from_text(&content).into_lines())
    }

    fn save(&self, name: &str, lines: &[String]) -> Result<(), EditError> {
        let path = self.resolve(name);
        std::fs::write(&path, lines.join("\n")).map_err(|e| EditError::Io {
            name: name.to_string(),
            message: e.to_string(),
        })?;

        bitworks_logger::info(format!("Saved {}", path.display()));
        Ok(())
    }

    fn is_protected(&self, name: &str) -> bool {
        is_file_readonly(&self.resolve(name))
    }
}

/// Check if file is read-only.
pub(crate) fn is_file_readonly(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.permissions().readonly())
        .unwrap_or(false)
}

/// Extract filename from path for title display.
pub(crate) fn path_to_title(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_title() {
        assert_eq!(path_to_title(Path::new("/foo/bar/test.txt")), "test.txt");
        assert_eq!(path_to_title(Path::new("simple.txt")), "simple.txt");
    }

    #[test]
    fn test_prefix_policy() {
        let policy = PrefixPolicy::new(vec!["readonly_".into(), "sys_".into()]);
        assert!(policy.is_read_only("readonly_notes.txt"));
        assert!(policy.is_read_only("sys_boot.md"));
        assert!(!policy.is_read_only("notes.txt"));
        assert!(!policy.is_read_only("my_sys_notes.txt"));
        assert!(!PrefixPolicy::default().is_read_only("sys_boot.md"));
    }

    #[test]
    fn test_closure_policy() {
        let policy = |name: &str| name.ends_with(".lock");
        assert!(policy.is_read_only("Cargo.lock"));
        assert!(!policy.is_read_only("Cargo.toml"));
    }

    #[test]
    fn test_round_trip_preserves_lines() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());
        let lines = vec!["first".to_string(), String::new(), "  third ".to_string()];

        storage.save("doc.txt", &lines).unwrap();
        assert_eq!(storage.load("doc.txt").unwrap(), lines);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("doc.txt")).unwrap(),
            "first\n\n  third "
        );
    }

    #[test]
    fn test_load_splits_crlf() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dos.txt"), "a\r\nb\r\n").unwrap();

        let storage = FsStorage::new(dir.path());
        assert_eq!(storage.load("dos.txt").unwrap(), vec!["a", "b", ""]);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path());
        assert_eq!(
            storage.load("missing.txt"),
            Err(EditError::NotFound("missing.txt".to_string()))
        );
    }

    #[test]
    fn test_save_failure_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path().join("no-such-dir"));
        let err = storage.save("doc.txt", &["x".to_string()]).unwrap_err();
        assert!(matches!(err, EditError::Io { ref name, .. } if name == "doc.txt"));
    }
}
