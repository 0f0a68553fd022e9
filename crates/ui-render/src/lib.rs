//! UI rendering components for BitWorks.
//!
//! Every function takes plain data so the renderer does not depend on the
//! application crate.

pub mod boot;
pub mod menu;
pub mod modal;
pub mod panel_rendering;
pub mod status_bar;

pub use boot::render_boot_screen;
pub use menu::{caption_positions, render_dropdown, render_menu_bar, MenuBarParams};
pub use modal::render_modal_frame;
pub use panel_rendering::render_panel;
pub use status_bar::{StatusBar, StatusBarParams};
