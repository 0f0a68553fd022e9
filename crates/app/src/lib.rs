//! Application orchestrator for BitWorks.
//!
//! This crate ties the panels together and provides:
//! - `App` - owns the panels, the focus state machine and the repeat timer
//! - `AppState` - quit flag, theme, configuration and status message
//! - `FocusState` - which panel or overlay receives keys
//! - `BootScreen` - the BIOS sequence shown before the IDE
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    bitworks (bin)                     │
//! │  main.rs - terminal setup, config, App composition    │
//! └──────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                bitworks-app (this crate)              │
//! │  App, FocusState, menus, boot screen, frame loop      │
//! └──────────────────────────────────────────────────────┘
//!            │                  │                 │
//!            ▼                  ▼                 ▼
//!     ┌────────────┐    ┌──────────────┐   ┌────────────┐
//!     │panel-editor│    │panel-file-list│   │panel-inbox │
//!     └────────────┘    └──────────────┘   └────────────┘
//! ```

pub mod app;
pub mod boot;
pub mod focus;
pub mod menu;
pub mod state;

pub use app::{App, Panels, RenderParts};
pub use boot::BootScreen;
pub use focus::{Dispatch, Focus, FocusState, Overlay, PanelId};
pub use menu::{MenuAction, MenuId, MENUS};
pub use state::{AppState, StatusMessage};
