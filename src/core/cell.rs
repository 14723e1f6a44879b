//! Terminal Cell
//!
//! Represents a single cell of a fake terminal: an optional character and
//! the options (colors and style) it is drawn with.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// A single cell in the terminal grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character in this cell. `None` for cells never written to,
    /// which render as a blank space.
    pub content: Option<char>,
    /// Colors and style attributes
    pub opts: CellOptions,
}

impl Cell {
    /// Create a new cell with a single character and default options
    pub fn new(c: char) -> Self {
        Self {
            content: Some(c),
            opts: CellOptions::default(),
        }
    }

    /// Create a new cell with a character and options
    pub fn with_opts(c: char, opts: CellOptions) -> Self {
        Self {
            content: Some(c),
            opts,
        }
    }

    /// Check if this cell is empty (no content)
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// The character to display for this cell
    pub fn display_char(&self) -> char {
        self.content.unwrap_or(' ')
    }

    /// Get the display width of this cell's content
    pub fn width(&self) -> usize {
        self.content.and_then(|c| c.width()).unwrap_or(0)
    }

    /// Clear the cell, keeping the given options
    pub fn clear(&mut self, opts: CellOptions) {
        self.content = None;
        self.opts = opts;
    }
}

/// The attributes a cell is drawn with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOptions {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Text style attributes
    #[serde(default)]
    pub style: Style,
}

impl CellOptions {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Field-by-field difference between two option sets.
    ///
    /// Emits one `field: want=X got=Y` line per differing field, in
    /// declaration order, joined with newlines. Returns an empty string when
    /// the options are equal.
    pub fn diff(want: &CellOptions, got: &CellOptions) -> String {
        let mut lines = Vec::new();

        if want.fg != got.fg {
            lines.push(format!("fg: want={} got={}", want.fg, got.fg));
        }
        if want.bg != got.bg {
            lines.push(format!("bg: want={} got={}", want.bg, got.bg));
        }
        for ((name, w), (_, g)) in want.style.flags().iter().zip(got.style.flags().iter()) {
            if w != g {
                lines.push(format!("style.{name}: want={w} got={g}"));
            }
        }

        lines.join("\n")
    }
}

/// Color representation supporting indexed and RGB colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Color {
    /// Default terminal color (foreground or background)
    #[default]
    Default,
    /// 256-color palette index
    Indexed { index: u8 },
    /// 24-bit RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Standard ANSI colors (0-7)
    pub const BLACK: Color = Color::Indexed { index: 0 };
    pub const RED: Color = Color::Indexed { index: 1 };
    pub const GREEN: Color = Color::Indexed { index: 2 };
    pub const YELLOW: Color = Color::Indexed { index: 3 };
    pub const BLUE: Color = Color::Indexed { index: 4 };
    pub const MAGENTA: Color = Color::Indexed { index: 5 };
    pub const CYAN: Color = Color::Indexed { index: 6 };
    pub const WHITE: Color = Color::Indexed { index: 7 };

    pub const fn indexed(index: u8) -> Self {
        Color::Indexed { index }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Default => write!(f, "default"),
            Color::Indexed { index } => write!(f, "indexed({index})"),
            Color::Rgb { r, g, b } => write!(f, "rgb({r},{g},{b})"),
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub faint: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub blink: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub inverse: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Style {
    /// All flags with their names, in declaration order
    fn flags(&self) -> [(&'static str, bool); 8] {
        [
            ("bold", self.bold),
            ("faint", self.faint),
            ("italic", self.italic),
            ("underline", self.underline),
            ("blink", self.blink),
            ("inverse", self.inverse),
            ("hidden", self.hidden),
            ("strikethrough", self.strikethrough),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.display_char(), ' ');
        assert_eq!(cell.opts.fg, Color::Default);
        assert_eq!(cell.opts.bg, Color::Default);
    }

    #[test]
    fn test_cell_new() {
        let cell = Cell::new('A');
        assert_eq!(cell.content, Some('A'));
        assert!(!cell.is_empty());
    }

    #[test]
    fn test_cell_clear() {
        let mut cell = Cell::with_opts('A', CellOptions::new(Color::RED, Color::Default));
        cell.clear(CellOptions::new(Color::Default, Color::BLUE));
        assert!(cell.is_empty());
        assert_eq!(cell.opts.fg, Color::Default);
        assert_eq!(cell.opts.bg, Color::BLUE);
    }

    #[test]
    fn test_cell_width() {
        assert_eq!(Cell::new('A').width(), 1);
        assert_eq!(Cell::new('中').width(), 2);
        assert_eq!(Cell::default().width(), 0);
    }

    #[test]
    fn test_absent_differs_from_space() {
        assert_ne!(Cell::default(), Cell::new(' '));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Default.to_string(), "default");
        assert_eq!(Color::RED.to_string(), "indexed(1)");
        assert_eq!(Color::rgb(255, 128, 0).to_string(), "rgb(255,128,0)");
    }

    #[test]
    fn test_options_diff_equal_is_empty() {
        let opts = CellOptions::new(Color::RED, Color::rgb(1, 2, 3));
        assert_eq!(CellOptions::diff(&opts, &opts), "");
    }

    #[test]
    fn test_options_diff_lists_fields_in_order() {
        let want = CellOptions::new(Color::Default, Color::Default);
        let got = CellOptions::new(Color::GREEN, Color::Default).with_style(Style {
            bold: true,
            underline: true,
            ..Default::default()
        });

        assert_eq!(
            CellOptions::diff(&want, &got),
            "fg: want=default got=indexed(2)\n\
             style.bold: want=false got=true\n\
             style.underline: want=false got=true"
        );
    }

    #[test]
    fn test_style_json_skips_unset_flags() {
        let style = Style {
            italic: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"italic":true}"#);
        let restored: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, style);
    }
}
