//! Menu actions for the application.

use anyhow::Result;

use bitworks_config::constants::PROGRAM_NAME;
use bitworks_logger as logger;
use bitworks_panel_editor::{status_event, EditResult, Editor};

use super::App;
use crate::focus::PanelId;
use crate::menu::MenuAction;

impl App {
    /// Execute a menu item or global shortcut
    pub(super) fn execute_menu_action(&mut self, action: MenuAction) -> Result<()> {
        logger::debug(format!("Menu action: {}", action.label()));

        match action {
            MenuAction::New => {
                self.panels.editor.new_document();
                self.focus.focus_panel(PanelId::Editor);
                self.state.set_info("New document");
            }
            MenuAction::Open => {
                self.focus.focus_panel(PanelId::FileList);
                match self.panels.file_list.refresh() {
                    Ok(()) => self.state.set_info("Select a file and press Enter"),
                    Err(e) => self.state.set_error(format!("Error: {:#}", e)),
                }
            }
            MenuAction::Save => self.save_document()?,
            MenuAction::Exit => {
                logger::info("Exit requested");
                self.state.quit();
            }
            MenuAction::Cut => self.run_edit(Editor::cut)?,
            MenuAction::Copy => self.run_edit(Editor::copy)?,
            MenuAction::Paste => self.run_edit(Editor::paste)?,
            MenuAction::SelectAll => {
                self.run_edit(|editor| {
                    editor.select_all();
                    Ok(())
                })?;
            }
            MenuAction::About => {
                self.state.set_info(format!(
                    "{} v{}",
                    PROGRAM_NAME,
                    env!("CARGO_PKG_VERSION")
                ));
            }
        }
        Ok(())
    }

    /// Run an editing operation from a menu and report its outcome.
    fn run_edit(&mut self, op: impl FnOnce(&mut Editor) -> EditResult) -> Result<()> {
        self.focus.focus_panel(PanelId::Editor);
        let result = op(&mut self.panels.editor);
        self.report_edit(result)
    }

    /// Save the editor document into the workspace
    pub(super) fn save_document(&mut self) -> Result<()> {
        let result = self.panels.editor.save_document(&self.storage);
        let saved = result.is_ok();
        self.report_edit(result)?;

        if saved {
            if let Err(e) = self.panels.file_list.refresh() {
                logger::warn(format!("{:#}", e));
            }
            if let Some(name) = self.panels.editor.document().name.clone() {
                self.panels.file_list.highlight(&name);
                logger::info(format!("Saved {}", name));
            }
        }
        Ok(())
    }

    /// Turn an edit result and the editor's pending message into status.
    fn report_edit(&mut self, result: EditResult) -> Result<()> {
        if let Some(event) = status_event(result) {
            self.process_panel_events(vec![event])?;
        }
        if let Some(message) = self.panels.editor.take_status_message() {
            self.state.set_info(message);
        }
        Ok(())
    }
}
