//! Panel trait definition for BitWorks panels.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use bitworks_theme::Theme;

use crate::PanelEvent;

/// Render context passed to panels during rendering.
pub struct RenderContext<'a> {
    /// Current theme colors
    pub theme: &'a Theme,
    /// Whether this panel currently owns keyboard focus
    pub is_focused: bool,
}

/// Trait for the base panels (editor, file list, inbox).
///
/// Panels communicate with the application through `PanelEvent`s
/// instead of directly modifying application state.
pub trait Panel {
    /// Unique name for panel identification.
    fn name(&self) -> &'static str;

    /// Dynamic title for display in the panel header.
    fn title(&self) -> String;

    /// Render the panel to the buffer.
    ///
    /// Takes `&mut self` so the panel can adopt the visible height of
    /// `area` into its viewport before drawing.
    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &RenderContext);

    /// Handle keyboard input.
    ///
    /// Returns a list of events to be processed by the application.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<PanelEvent>;
}
