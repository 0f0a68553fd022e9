use std::fmt;

/// Result of an editing operation.
pub type EditResult = Result<(), EditError>;

/// Why an operation left everything untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// Cursor already at the start or end of the buffer
    Boundary,
    /// Copy/cut without a non-empty selection
    NothingSelected,
    /// Paste with an empty clipboard
    EmptyClipboard,
    /// Control characters are not inserted
    NotPrintable,
}

impl NoOpReason {
    /// Message shown in the status bar, if the condition is worth reporting.
    pub fn message(self) -> Option<&'static str> {
        match self {
            NoOpReason::Boundary | NoOpReason::NotPrintable => None,
            NoOpReason::NothingSelected => Some("Nothing selected"),
            NoOpReason::EmptyClipboard => Some("Clipboard is empty"),
        }
    }
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NoOpReason::Boundary => "at buffer boundary",
            NoOpReason::NothingSelected => "nothing selected",
            NoOpReason::EmptyClipboard => "clipboard is empty",
            NoOpReason::NotPrintable => "character is not printable",
        };
        f.write_str(text)
    }
}

/// Recoverable failures of editing and storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("nothing to do: {0}")]
    NoOp(NoOpReason),

    #[error("document is read-only")]
    ReadOnly,

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("cannot access {name}: {message}")]
    Io { name: String, message: String },
}

impl EditError {
    pub fn is_noop(&self) -> bool {
        matches!(self, EditError::NoOp(_))
    }
}

impl From<NoOpReason> for EditError {
    fn from(reason: NoOpReason) -> Self {
        EditError::NoOp(reason)
    }
}
