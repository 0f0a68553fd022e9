//! Workspace file list panel for BitWorks.
//!
//! Shows the files of the workspace directory; Enter asks the application
//! to open the highlighted one in the editor.

mod scan;

pub use scan::scan_workspace;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use std::path::{Path, PathBuf};

use bitworks_core::{fit_to_width, ListState, Panel, PanelEvent, RenderContext};

/// File list panel
#[derive(Debug)]
pub struct FileList {
    dir: PathBuf,
    extensions: Vec<String>,
    names: Vec<String>,
    list: ListState,
}

impl FileList {
    /// Create the panel and scan `dir` once.
    ///
    /// A failed scan leaves the list empty; it is logged, not fatal.
    pub fn new(dir: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        let mut panel = Self {
            dir: dir.into(),
            extensions,
            names: Vec::new(),
            list: ListState::new(),
        };
        if let Err(e) = panel.refresh() {
            bitworks_logger::warn(format!("{:#}", e));
        }
        panel
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of the highlighted file
    pub fn selected_name(&self) -> Option<&str> {
        self.names.get(self.list.selected()).map(String::as_str)
    }

    /// Rescan the directory, keeping the highlight on the same name when it
    /// still exists.
    pub fn refresh(&mut self) -> Result<()> {
        let current = self.selected_name().map(str::to_string);
        let scanned = scan_workspace(&self.dir, &self.extensions);
        self.names = match scanned {
            Ok(names) => names,
            Err(e) => {
                self.names.clear();
                self.list.select(0, 0);
                return Err(e);
            }
        };

        let index = current
            .and_then(|name| self.names.iter().position(|n| *n == name))
            .unwrap_or(0);
        self.list.select(index, self.names.len());
        bitworks_logger::debug(format!(
            "Scanned {}: {} files",
            self.dir.display(),
            self.names.len()
        ));
        Ok(())
    }

    /// Highlight `name` if it is listed (e.g. after a save created it).
    pub fn highlight(&mut self, name: &str) {
        if let Some(index) = self.names.iter().position(|n| n == name) {
            self.list.select(index, self.names.len());
        }
    }
}

impl Panel for FileList {
    fn name(&self) -> &'static str {
        "files"
    }

    fn title(&self) -> String {
        format!("Files ({})", self.names.len())
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &RenderContext) {
        let theme = ctx.theme;
        self.list
            .set_max_visible(area.height as usize, self.names.len());

        if self.names.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                fit_to_width("(no files)", area.width as usize),
                Style::default().fg(theme.disabled).bg(theme.bg),
            );
            return;
        }

        let normal = Style::default().fg(theme.fg).bg(theme.bg);
        let highlighted = if ctx.is_focused {
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accented_fg).bg(theme.bg)
        };

        let range = self.list.viewport().visible_range(self.names.len());
        for (row, index) in range.enumerate() {
            if row >= area.height as usize {
                break;
            }
            let style = if index == self.list.selected() {
                highlighted
            } else {
                normal
            };
            buf.set_string(
                area.x,
                area.y + row as u16,
                fit_to_width(&self.names[index], area.width as usize),
                style,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<PanelEvent> {
        if self.list.handle_navigation(&key, self.names.len()) {
            return Vec::new();
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => match self.selected_name() {
                Some(name) => vec![PanelEvent::OpenFile(name.to_string())],
                None => vec![PanelEvent::info("No files in workspace")],
            },
            (KeyCode::F(5), _) | (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                match self.refresh() {
                    Ok(()) => vec![PanelEvent::info(format!(
                        "{} files in workspace",
                        self.names.len()
                    ))],
                    Err(e) => vec![PanelEvent::error(format!("Error: {:#}", e))],
                }
            }
            _ => Vec::new(),
        }
    }
}
