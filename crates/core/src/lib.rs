//! Core types and traits for BitWorks panels.
//!
//! Panels receive keys and report back through `PanelEvent`s, so they stay
//! independent of the application state that owns them.

pub mod event;
pub mod list;
pub mod panel;

pub use event::{Event, EventHandler, InputEvent, PanelEvent};
pub use list::{fit_to_width, ListState};
pub use panel::{Panel, RenderContext};

pub use bitworks_theme::Theme;
