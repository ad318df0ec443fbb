// ABOUTME: Cell-based rectangle used to place panels on the grid.
// ABOUTME: Coordinates are relative to the owning view's origin.

use serde::{Deserialize, Serialize};

/// Rectangle in grid cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub row: u16,
    pub col: u16,
    pub height: u16,
    pub width: u16,
}

impl Rect {
    pub const fn new(row: u16, col: u16, height: u16, width: u16) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    /// Column just past the right edge
    pub fn right(&self) -> i32 {
        i32::from(self.col) + i32::from(self.width)
    }

    /// Row just past the bottom edge
    pub fn bottom(&self) -> i32 {
        i32::from(self.row) + i32::from(self.height)
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= i32::from(self.row)
            && row < self.bottom()
            && col >= i32::from(self.col)
            && col < self.right()
    }
}
