// ABOUTME: Drawing interface implemented by grid backends.
// ABOUTME: Every primitive reports off-grid coordinates instead of panicking.

use crate::{Glyph, Style};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("({row}, {col}) is outside the {height}x{width} surface")]
    OutOfBounds {
        row: i32,
        col: i32,
        height: u16,
        width: u16,
    },
}

pub type DrawResult = Result<(), DrawError>;

/// A rectangular character grid. Coordinates are (row, col) from the top-left.
///
/// Primitives fail with `DrawError::OutOfBounds` when their starting cell is
/// off the grid. Lines and strings that start on the grid are clipped at the
/// edge.
pub trait Surface {
    /// (height, width) in cells
    fn size(&self) -> (u16, u16);

    /// Blank every cell
    fn erase(&mut self);

    /// Style used by subsequent writes
    fn set_style(&mut self, style: Style);

    fn reset_style(&mut self) {
        self.set_style(Style::Default);
    }

    /// Repeat `glyph` rightwards for `len` cells
    fn hline(&mut self, row: i32, col: i32, glyph: Glyph, len: i32) -> DrawResult;

    /// Repeat `glyph` downwards for `len` cells
    fn vline(&mut self, row: i32, col: i32, glyph: Glyph, len: i32) -> DrawResult;

    fn addch(&mut self, row: i32, col: i32, glyph: Glyph) -> DrawResult;

    /// Write at most `max_width` display columns of `text`
    fn addnstr(&mut self, row: i32, col: i32, text: &str, max_width: usize) -> DrawResult;

    fn addstr(&mut self, row: i32, col: i32, text: &str) -> DrawResult {
        self.addnstr(row, col, text, usize::MAX)
    }

    /// Place the terminal cursor
    fn move_cursor(&mut self, row: i32, col: i32) -> DrawResult;
}
