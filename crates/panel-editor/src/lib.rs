//! Text editor panel for BitWorks.
//!
//! The editor session owns the line buffer, cursor, selection, viewport and
//! clipboard, and exposes every editing operation as a method returning
//! [`EditResult`].

pub mod clipboard;
mod core;
pub mod file_io;
pub mod keyboard;
mod rendering;
pub mod selection;
mod state;
pub mod text_editing;

pub use core::{status_event, Editor, Motion};
pub use file_io::{FsStorage, PrefixPolicy, ReadOnlyPolicy, Storage};
pub use keyboard::EditorCommand;
pub use state::Document;

pub use bitworks_buffer::{Cursor, EditError, EditResult, LineBuffer, NoOpReason, Selection};
