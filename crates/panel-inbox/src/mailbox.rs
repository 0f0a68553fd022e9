//! Email records and the mailbox file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One message in the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub sender: String,
    pub date: String,
    pub subject: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub body: String,
}

impl EmailRecord {
    pub fn new(
        sender: impl Into<String>,
        date: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            date: date.into(),
            subject: subject.into(),
            read: false,
            body: body.into(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MailboxFile {
    #[serde(default)]
    message: Vec<EmailRecord>,
}

/// Parse mailbox TOML: a list of `[[message]]` tables.
pub fn parse_mailbox(content: &str) -> Result<Vec<EmailRecord>> {
    let file: MailboxFile = toml::from_str(content).context("Failed to parse mailbox")?;
    Ok(file.message)
}

/// Load the mailbox file at `path`.
pub fn load_mailbox(path: &Path) -> Result<Vec<EmailRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read mailbox: {}", path.display()))?;
    let records = parse_mailbox(&content)
        .with_context(|| format!("Invalid mailbox: {}", path.display()))?;
    bitworks_logger::info(format!(
        "Loaded {} messages from {}",
        records.len(),
        path.display()
    ));
    Ok(records)
}

/// Messages shown when no mailbox file is configured.
pub fn welcome_mailbox() -> Vec<EmailRecord> {
    vec![
        EmailRecord::new(
            "sysop@jackgames.com",
            "12-25-1991",
            "Welcome to BitWorks",
            "Welcome to BitWorks Text Editor!\n\n\
             Press F1 for the File menu, F2 for the Edit menu and F3 for Help. \
             While a menu is open, press the F-key or digit shown next to an item \
             to pick it, or Esc to close the menu.\n\n\
             Tab moves between the editor, the file list and this inbox.",
        ),
        EmailRecord::new(
            "support@jackgames.com",
            "12-26-1991",
            "Keyboard shortcuts",
            "Ctrl+S saves, Ctrl+N starts a new document and Ctrl+Q quits.\n\
             Ctrl+A selects everything; Ctrl+C, Ctrl+X and Ctrl+V copy, cut and paste.\n\
             Hold Shift while moving the cursor to select text.",
        ),
        EmailRecord::new(
            "admin@jackgames.com",
            "12-27-1991",
            "Protected files",
            "Files whose names start with sys_ or readonly_ open read-only. \
             You can still select and copy from them.",
        ),
    ]
}
