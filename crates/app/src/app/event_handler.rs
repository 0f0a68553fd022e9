//! Panel event processing for the application.
//!
//! Processes `PanelEvent`s emitted by panels and translates them
//! into application state changes.

use anyhow::Result;

use bitworks_core::PanelEvent;
use bitworks_logger as logger;
use bitworks_panel_editor::{EditError, ReadOnlyPolicy};

use super::App;
use crate::focus::PanelId;

impl App {
    /// Process events emitted by a panel.
    pub(super) fn process_panel_events(&mut self, events: Vec<PanelEvent>) -> Result<()> {
        for event in events {
            self.process_single_event(event)?;
        }
        Ok(())
    }

    /// Process a single panel event.
    fn process_single_event(&mut self, event: PanelEvent) -> Result<()> {
        match event {
            PanelEvent::SetStatusMessage { message, is_error } => {
                if is_error {
                    self.state.set_error(message);
                } else {
                    self.state.set_info(message);
                }
            }
            PanelEvent::OpenFile(name) => self.open_file(&name),
            PanelEvent::OpenEmail(index) => match self.panels.inbox.open(index) {
                Some(modal) => {
                    logger::debug(format!("Opened email {}", index));
                    self.focus.open_email(modal);
                }
                None => logger::warn(format!("No email at index {}", index)),
            },
        }
        Ok(())
    }

    /// Load a workspace file into the editor and focus it.
    ///
    /// A missing file starts an empty document bound to that name.
    fn open_file(&mut self, name: &str) {
        let result =
            self.panels
                .editor
                .load_document(name, &self.storage, &self.read_only_policy);

        match result {
            Ok(()) => {
                let suffix = if self.panels.editor.document().read_only {
                    " (read-only)"
                } else {
                    ""
                };
                self.state.set_info(format!("Opened {}{}", name, suffix));
            }
            Err(EditError::NotFound(_)) => {
                let read_only = self.read_only_policy.is_read_only(name);
                self.panels.editor.open_document(name, Vec::new(), read_only);
                self.state.set_info(format!("New file {}", name));
            }
            Err(e) => {
                self.state.set_error(format!("Error: {}", e));
                return;
            }
        }
        self.focus.focus_panel(PanelId::Editor);
    }
}
