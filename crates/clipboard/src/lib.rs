//! Clipboard for BitWorks.
//!
//! A single text slot owned by the editor session. Copy and cut may also be
//! mirrored into the system clipboard via arboard; paste always reads the
//! session slot, so behavior does not depend on the desktop environment.

use std::fmt;

#[cfg(target_os = "linux")]
use arboard::{LinuxClipboardKind, SetExtLinux};

/// Single-slot clipboard
#[derive(Default)]
pub struct Clipboard {
    /// Last copied or cut text; empty means nothing to paste
    text: String,
    /// System clipboard receiving a copy of every write
    mirror: Option<arboard::Clipboard>,
}

impl fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clipboard")
            .field("text", &self.text)
            .field("mirrored", &self.mirror.is_some())
            .finish()
    }
}

impl Clipboard {
    /// Clipboard local to the session
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard that also writes to the system clipboard.
    ///
    /// Falls back to a session-only clipboard when no system clipboard is
    /// available (e.g. no display server).
    pub fn with_system_mirror() -> Self {
        let mirror = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                bitworks_logger::warn(format!("System clipboard unavailable: {}", e));
                None
            }
        };
        Self {
            text: String::new(),
            mirror,
        }
    }

    /// Replace the slot contents
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if let Some(mirror) = self.mirror.as_mut() {
            if let Err(e) = write_system(mirror, &self.text) {
                bitworks_logger::warn(format!("Failed to mirror clipboard: {}", e));
            }
        }
    }

    /// Current contents
    pub fn get(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirror.is_some()
    }
}

/// Copy text into the system clipboard.
///
/// On Linux, copies to both CLIPBOARD and PRIMARY selections.
fn write_system(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    #[cfg(target_os = "linux")]
    {
        clipboard
            .set()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text(text.to_string())?;

        // PRIMARY is best effort (middle-click paste)
        let _ = clipboard
            .set()
            .clipboard(LinuxClipboardKind::Primary)
            .text(text.to_string());
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    clipboard.set_text(text)
}
