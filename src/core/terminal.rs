//! Fake Terminal
//!
//! An in-memory stand-in for a real terminal. Widgets draw into its back
//! buffer and tests compare the result against an expected terminal with
//! [`crate::diff::diff`].
//!
//! The back buffer is stored column-major: `back_buffer()[col][row]`.

use std::fmt;
use std::fs;
use std::path::Path;

use log::trace;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use super::cell::{Cell, CellOptions};
use crate::error::{Error, Result};

/// Terminal dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A fake terminal holding a grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TerminalData")]
pub struct FakeTerminal {
    size: Size,
    /// Cells indexed as `buffer[col][row]`
    buffer: Vec<Vec<Cell>>,
}

/// Unvalidated form of a terminal as read from JSON
#[derive(Deserialize)]
struct TerminalData {
    size: Size,
    buffer: Vec<Vec<Cell>>,
}

impl TryFrom<TerminalData> for FakeTerminal {
    type Error = Error;

    fn try_from(data: TerminalData) -> Result<Self> {
        let Size { width, height } = data.size;
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize { width, height });
        }
        if data.buffer.len() != width {
            return Err(Error::MalformedSnapshot(format!(
                "expected {} columns, found {}",
                width,
                data.buffer.len()
            )));
        }
        if let Some((col, column)) = data
            .buffer
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != height)
        {
            return Err(Error::MalformedSnapshot(format!(
                "column {} has {} rows, expected {}",
                col,
                column.len(),
                height
            )));
        }

        let term = Self {
            size: data.size,
            buffer: data.buffer,
        };
        for row in 0..height {
            for col in 0..width {
                term.check_loaded_cell(col, row)?;
            }
        }
        Ok(term)
    }
}

impl FakeTerminal {
    /// Create a terminal of the given size with every cell empty
    pub fn new(size: Size) -> Result<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(Error::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }

        Ok(Self {
            size,
            buffer: vec![vec![Cell::default(); size.height]; size.width],
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of cells in the terminal
    pub fn area(&self) -> usize {
        self.size.width * self.size.height
    }

    /// Get a reference to a cell
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.buffer.get(col).and_then(|c| c.get(row))
    }

    /// The column-major back buffer
    pub fn back_buffer(&self) -> &[Vec<Cell>] {
        &self.buffer
    }

    /// Set the character and options of one cell.
    ///
    /// A full-width character also claims the cell to its right, which
    /// becomes a partial cell carrying the same options. Partial cells can't
    /// be written to until the full-width character is overwritten.
    pub fn set_cell(&mut self, col: usize, row: usize, c: char, opts: CellOptions) -> Result<()> {
        self.check_bounds(col, row)?;
        let width = c
            .width()
            .filter(|w| *w > 0)
            .ok_or(Error::ZeroWidthRune(c))?;

        if width > 1 && col + 1 >= self.size.width {
            return Err(Error::NoRoomForWideRune { col, row, rune: c });
        }
        if self.is_partial(col, row) {
            return Err(Error::PartialCell { col, row, rune: c });
        }

        trace!("set_cell ({},{}) = {:?}", col, row, c);
        self.buffer[col][row] = Cell::with_opts(c, opts);
        if width > 1 {
            self.buffer[col + 1][row] = Cell {
                content: None,
                opts,
            };
        }
        Ok(())
    }

    /// Whether this cell is the second half of a full-width character
    pub fn is_partial(&self, col: usize, row: usize) -> bool {
        col > 0
            && self
                .cell(col - 1, row)
                .map(|prev| prev.width() > 1)
                .unwrap_or(false)
    }

    /// Write text left to right starting at a cell.
    ///
    /// Stops at the end of the row. Returns the number of cells consumed.
    pub fn write_str(&mut self, col: usize, row: usize, text: &str, opts: CellOptions) -> Result<usize> {
        self.check_bounds(col, row)?;

        let mut x = col;
        for c in text.chars() {
            let width = c.width().unwrap_or(0);
            if width > 0 && x + width > self.size.width {
                break;
            }
            self.set_cell(x, row, c, opts)?;
            x += width;
        }
        Ok(x - col)
    }

    /// Clear every cell, leaving it empty with the given options
    pub fn clear(&mut self, opts: CellOptions) {
        for cell in self.buffer.iter_mut().flatten() {
            cell.clear(opts);
        }
    }

    /// Text of the terminal, ignoring cell options.
    ///
    /// One line per row, each terminated by a newline. Empty cells render as
    /// spaces and partial cells are skipped.
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(self.area() + self.size.height);

        for row in 0..self.size.height {
            for col in 0..self.size.width {
                if self.is_partial(col, row) {
                    continue;
                }
                result.push(self.buffer[col][row].display_char());
            }
            result.push('\n');
        }

        result
    }

    /// Convert the terminal to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a terminal from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a terminal from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the terminal to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Apply the `set_cell` rules to a cell read from a snapshot file
    fn check_loaded_cell(&self, col: usize, row: usize) -> Result<()> {
        let cell = &self.buffer[col][row];
        let Some(c) = cell.content else {
            return Ok(());
        };

        let width = cell.width();
        let problem = if width == 0 {
            "has no display width"
        } else if width > 1 && col + 1 >= self.size.width {
            "is full-width in the last column"
        } else if self.is_partial(col, row) {
            "follows a full-width rune"
        } else {
            return Ok(());
        };
        Err(Error::MalformedSnapshot(format!(
            "rune {:?} at cell ({},{}) {}",
            c, col, row, problem
        )))
    }

    fn check_bounds(&self, col: usize, row: usize) -> Result<()> {
        if col >= self.size.width || row >= self.size.height {
            return Err(Error::OutOfBounds {
                col,
                row,
                width: self.size.width,
                height: self.size.height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for FakeTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
