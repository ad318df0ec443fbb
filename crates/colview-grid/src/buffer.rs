// ABOUTME: Surface implementation backed by a ratatui Buffer.
// ABOUTME: Used for headless rendering and for snapshotting output in tests.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect as Area;
use ratatui::style::{Modifier, Style as CellStyle};
use unicode_width::UnicodeWidthStr;

use crate::{DrawError, DrawResult, Glyph, Style, Surface};

impl Style {
    /// Cell style written to the buffer. Every write replaces the previous
    /// cell style completely.
    fn to_cell_style(self) -> CellStyle {
        match self {
            Style::Default => CellStyle::reset(),
            Style::Border => CellStyle::reset().add_modifier(Modifier::DIM),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BufferSurface {
    buffer: Buffer,
    style: Style,
    cursor: Option<(u16, u16)>,
}

impl BufferSurface {
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            buffer: Buffer::empty(Area::new(0, 0, width, height)),
            style: Style::Default,
            cursor: None,
        }
    }

    /// Change dimensions, discarding content
    pub fn resize(&mut self, height: u16, width: u16) {
        self.buffer = Buffer::empty(Area::new(0, 0, width, height));
        self.cursor = None;
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Copy of the buffer with every cell style reset, for comparing
    /// against `Buffer::with_lines`
    pub fn unstyled(&self) -> Buffer {
        let mut plain = self.buffer.clone();
        plain.set_style(plain.area, CellStyle::reset());
        plain
    }

    /// Last position passed to `move_cursor`
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Text of one row, without trailing blanks
    pub fn row_text(&self, row: u16) -> String {
        let mut text = String::new();
        let mut col = 0;
        while col < self.buffer.area.width {
            let Some(cell) = self.buffer.cell((col, row)) else {
                break;
            };
            let symbol = cell.symbol();
            text.push_str(symbol);
            // cells covered by a wide symbol are skipped
            col = col.saturating_add(symbol.width().max(1) as u16);
        }
        text.trim_end().to_string()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.buffer.area.height)
            .map(|row| self.row_text(row))
            .collect()
    }

    /// Validate a starting cell and convert it to buffer coordinates
    fn check(&self, row: i32, col: i32) -> Result<(u16, u16), DrawError> {
        let (height, width) = self.size();
        let row_ok = u16::try_from(row).ok().filter(|r| *r < height);
        let col_ok = u16::try_from(col).ok().filter(|c| *c < width);
        match (row_ok, col_ok) {
            (Some(row), Some(col)) => Ok((row, col)),
            _ => Err(DrawError::OutOfBounds {
                row,
                col,
                height,
                width,
            }),
        }
    }

    fn put(&mut self, row: u16, col: u16, glyph: Glyph) {
        let style = self.style.to_cell_style();
        if let Some(cell) = self.buffer.cell_mut((col, row)) {
            cell.set_char(glyph.to_char()).set_style(style);
        }
    }
}

impl Surface for BufferSurface {
    fn size(&self) -> (u16, u16) {
        (self.buffer.area.height, self.buffer.area.width)
    }

    fn erase(&mut self) {
        self.buffer.reset();
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    fn hline(&mut self, row: i32, col: i32, glyph: Glyph, len: i32) -> DrawResult {
        let (row, col) = self.check(row, col)?;
        let len = u16::try_from(len).unwrap_or(0);
        let end = col.saturating_add(len).min(self.buffer.area.width);
        for x in col..end {
            self.put(row, x, glyph);
        }
        Ok(())
    }

    fn vline(&mut self, row: i32, col: i32, glyph: Glyph, len: i32) -> DrawResult {
        let (row, col) = self.check(row, col)?;
        let len = u16::try_from(len).unwrap_or(0);
        let end = row.saturating_add(len).min(self.buffer.area.height);
        for y in row..end {
            self.put(y, col, glyph);
        }
        Ok(())
    }

    fn addch(&mut self, row: i32, col: i32, glyph: Glyph) -> DrawResult {
        let (row, col) = self.check(row, col)?;
        self.put(row, col, glyph);
        Ok(())
    }

    fn addnstr(&mut self, row: i32, col: i32, text: &str, max_width: usize) -> DrawResult {
        let (row, col) = self.check(row, col)?;
        self.buffer
            .set_stringn(col, row, text, max_width, self.style.to_cell_style());
        Ok(())
    }

    fn move_cursor(&mut self, row: i32, col: i32) -> DrawResult {
        let pos = self.check(row, col)?;
        self.cursor = Some(pos);
        Ok(())
    }
}
