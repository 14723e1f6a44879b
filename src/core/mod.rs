//! Fake Terminal Core
//!
//! The terminal model compared by [`crate::diff`]:
//! - Cells with their colors and style
//! - The fake terminal itself, a column-major grid of cells
//!
//! Nothing here touches a real terminal, so snapshots are fully
//! deterministic and cheap to build in tests.

mod cell;
mod terminal;

pub use cell::{Cell, CellOptions, Color, Style};
pub use terminal::{FakeTerminal, Size};
