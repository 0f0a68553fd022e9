//! Text model for BitWorks.
//!
//! A line-oriented buffer addressed by grapheme columns, along with the
//! cursor, selection and viewport types the editor session is built from.

mod buffer;
mod cursor;
mod error;
mod selection;
mod viewport;
mod wrap;

pub use buffer::LineBuffer;
pub use cursor::Cursor;
pub use error::{EditError, EditResult, NoOpReason};
pub use selection::Selection;
pub use viewport::{ScrollDirection, Viewport};
pub use wrap::{calculate_wrap_point, calculate_wrap_points_for_line, is_word_boundary, wrap_text};
