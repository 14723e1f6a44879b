//! Fake terminals for testing terminal UIs
//!
//! Widgets draw into a [`FakeTerminal`] and tests compare it against the
//! expected terminal. When the two differ, [`diff`] explains how:
//!
//! - `core`: Fake terminal, cells, colors and styles
//! - `diff`: Human readable differences between two fake terminals
//! - `error`: Errors for building and loading fake terminals

pub mod core;
pub mod diff;
pub mod error;

pub use crate::core::{Cell, CellOptions, Color, FakeTerminal, Size, Style};
pub use crate::diff::diff;
pub use crate::error::{Error, Result};
