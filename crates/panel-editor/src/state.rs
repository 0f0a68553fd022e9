//! Per-document and input state of the editor.

/// Name used when an untitled document is saved.
pub const UNTITLED_FILE_NAME: &str = "untitled.txt";

/// The document currently open in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Workspace file name; None for a new, never-saved document
    pub name: Option<String>,
    /// Mutations are rejected
    pub read_only: bool,
    /// Buffer differs from what was last loaded or saved
    pub modified: bool,
}

impl Document {
    /// Fresh untitled document.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Document bound to a workspace file.
    pub fn named(name: impl Into<String>, read_only: bool) -> Self {
        Self {
            name: Some(name.into()),
            read_only,
            modified: false,
        }
    }

    /// Name for display in titles and the status bar.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled")
    }

    /// Name to store the document under.
    pub fn save_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNTITLED_FILE_NAME)
    }
}

/// Input-related state for the editor.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    /// Preferred column for vertical navigation (maintains column across lines).
    pub preferred_column: Option<usize>,
}

impl InputState {
    /// Reset preferred column (e.g., after horizontal movement).
    pub fn clear_preferred_column(&mut self) {
        self.preferred_column = None;
    }

    /// Get preferred column, remembering `current_col` if none is set yet.
    pub fn take_preferred_column(&mut self, current_col: usize) -> usize {
        *self.preferred_column.get_or_insert(current_col)
    }
}
