//! Differences between two fake terminals
//!
//! [`diff`] returns an empty string for equal terminals and otherwise a
//! report meant to be printed by a failing test:
//!
//! ```text
//! found differences between the two fake terminals.
//!    got:
//! AC
//!   want:
//! AB
//!   diff (unexpected cells highlighted with rune '࿃')
//!   note - this excludes cell options:
//! A࿃
//! ```
//!
//! Character and option differences are tracked separately. Cells whose
//! options differ are listed after the grid, in row-major order.

use std::fmt::Write;

use log::{debug, warn};

use crate::core::{CellOptions, FakeTerminal};

/// Marks cells whose characters differ in the combined grid
pub const SENTINEL: char = '࿃';

/// A cell whose options differ between the two terminals
#[derive(Debug)]
struct OptsMismatch<'a> {
    col: usize,
    row: usize,
    want: &'a CellOptions,
    got: &'a CellOptions,
}

/// Compare two fake terminals.
///
/// Returns an empty string if they are equal, including every cell option.
/// Otherwise returns a description of the differences.
pub fn diff(want: &FakeTerminal, got: &FakeTerminal) -> String {
    if want == got {
        return String::new();
    }

    let mut b = String::new();
    b.push_str("found differences between the two fake terminals.\n");
    b.push_str("   got:\n");
    b.push_str(&got.render());
    b.push_str("  want:\n");
    b.push_str(&want.render());

    let size = got.size();
    if size != want.size() {
        warn!("comparing fake terminals of different sizes: got {}, want {}", size, want.size());
        let _ = writeln!(b, "  size mismatch: got {}, want {}", size, want.size());
        return b;
    }

    let _ = writeln!(b, "  diff (unexpected cells highlighted with rune '{SENTINEL}')");
    b.push_str("  note - this excludes cell options:\n");

    let mut mismatches = Vec::new();
    let mut changed = 0usize;
    for row in 0..size.height {
        for col in 0..size.width {
            let got_cell = &got.back_buffer()[col][row];
            let want_cell = &want.back_buffer()[col][row];

            if got_cell.content != want_cell.content {
                changed += 1;
                b.push(SENTINEL);
            } else {
                b.push(got_cell.display_char());
            }

            if got_cell.opts != want_cell.opts {
                mismatches.push(OptsMismatch {
                    col,
                    row,
                    want: &want_cell.opts,
                    got: &got_cell.opts,
                });
            }
        }
        b.push('\n');
    }

    debug!(
        "fake terminals differ: {} cells with different runes, {} with different options",
        changed,
        mismatches.len()
    );
    write_opts_diffs(&mut b, &mismatches, CellOptions::diff);
    b
}

/// Append the option differences section. Mismatches whose diff text comes
/// out empty are skipped.
fn write_opts_diffs<F>(b: &mut String, mismatches: &[OptsMismatch<'_>], diff_opts: F)
where
    F: Fn(&CellOptions, &CellOptions) -> String,
{
    if mismatches.is_empty() {
        return;
    }

    b.push_str("  Found differences in options on some of the cells:\n");
    for m in mismatches {
        let d = diff_opts(m.want, m.got);
        if !d.is_empty() {
            let _ = writeln!(b, "cell ({},{}), diff (-want +got):\n{}", m.col, m.row, d);
        }
    }
}

/// Assert that two fake terminals are equal, panicking with the output of
/// [`diff`] when they are not.
#[macro_export]
macro_rules! assert_terminal_eq {
    ($want:expr, $got:expr $(,)?) => {{
        let d = $crate::diff::diff(&$want, &$got);
        if !d.is_empty() {
            panic!("{}", d);
        }
    }};
}
