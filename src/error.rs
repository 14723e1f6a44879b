//! Error types for fake terminal operations

use std::io;
use thiserror::Error;

/// Fake terminal error type
#[derive(Error, Debug)]
pub enum Error {
    /// Terminal created with a zero dimension
    #[error("invalid terminal size {width}x{height}, both dimensions must be non-zero")]
    InvalidSize { width: usize, height: usize },

    /// Cell coordinates outside the terminal
    #[error("cell ({col},{row}) is outside of the {width}x{height} terminal")]
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    /// Character without a display width (control characters)
    #[error("rune {0:?} has no display width")]
    ZeroWidthRune(char),

    /// Full-width character placed where its second half does not fit
    #[error("cell ({col},{row}) has no room for full-width rune {rune:?}")]
    NoRoomForWideRune { col: usize, row: usize, rune: char },

    /// Write onto the second half of a full-width character
    #[error("cell ({col},{row}) is the second half of a full-width rune, cannot hold rune {rune:?}")]
    PartialCell { col: usize, row: usize, rune: char },

    /// Deserialized snapshot with an inconsistent buffer
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for fake terminal operations
pub type Result<T> = std::result::Result<T, Error>;
