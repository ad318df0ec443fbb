// ABOUTME: Frame lines around the columns that show something.
// ABOUTME: Skips edge columns without a preview and joins separators with tees.

use colview_core::Rect;
use colview_grid::{DrawResult, Glyph, Style, Surface};

use crate::error::best_effort;
use crate::Column;

/// What the border renderer needs to know about a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnEdge {
    pub rect: Rect,
    pub has_preview: bool,
    pub main_column: bool,
}

impl ColumnEdge {
    pub fn of(column: &dyn Column) -> Self {
        Self {
            rect: column.geometry(),
            has_preview: column.has_preview(),
            main_column: column.is_main_column(),
        }
    }
}

/// Horizontal span of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderExtent {
    pub left_start: i32,
    pub right_end: i32,
}

/// Find the frame span, leaving out leading and trailing columns with
/// nothing to preview. A visible pager always owns the right edge.
pub fn border_extent(edges: &[ColumnEdge], pager_visible: bool, width: u16) -> BorderExtent {
    let mut left_start = 0;
    let mut right_end = i32::from(width) - 1;

    for edge in edges {
        if edge.has_preview {
            break;
        }
        left_start = edge.rect.right();
    }

    if !pager_visible {
        for edge in edges.iter().rev() {
            if edge.has_preview {
                break;
            }
            right_end = i32::from(edge.rect.col) - 1;
        }
        if right_end < left_start {
            right_end = i32::from(width) - 1;
        }
    }

    BorderExtent {
        left_start,
        right_end,
    }
}

/// Draw the frame, column separators, and corners. Glyphs that fall off the
/// surface are skipped.
pub fn draw_borders(
    surface: &mut dyn Surface,
    columns: &[Box<dyn Column>],
    pager_visible: bool,
    height: u16,
    width: u16,
) {
    let edges: Vec<ColumnEdge> = columns.iter().map(|c| ColumnEdge::of(c.as_ref())).collect();
    let BorderExtent {
        left_start,
        right_end,
    } = border_extent(&edges, pager_visible, width);
    let bottom = i32::from(height) - 1;
    let inner = i32::from(height) - 2;

    surface.set_style(Style::Border);

    best_effort(
        surface.hline(0, left_start, Glyph::HLine, right_end - left_start),
        "top rule",
    );
    best_effort(
        surface.hline(bottom, left_start, Glyph::HLine, right_end - left_start),
        "bottom rule",
    );
    best_effort(surface.vline(1, left_start, Glyph::VLine, inner), "left rule");

    for edge in edges.iter().filter(|e| e.has_preview) {
        if edge.main_column && pager_visible {
            best_effort(surface.vline(1, right_end, Glyph::VLine, inner), "pager rule");
            break;
        }
        best_effort(separator(surface, edge.rect.right(), bottom), "separator");
    }

    best_effort(surface.addch(0, left_start, Glyph::ULCorner), "corner");
    best_effort(surface.addch(bottom, left_start, Glyph::LLCorner), "corner");
    best_effort(surface.addch(0, right_end, Glyph::URCorner), "corner");
    best_effort(surface.addch(bottom, right_end, Glyph::LRCorner), "corner");

    surface.reset_style();
}

fn separator(surface: &mut dyn Surface, x: i32, bottom: i32) -> DrawResult {
    surface.vline(1, x, Glyph::VLine, bottom - 1)?;
    surface.addch(0, x, Glyph::TTee)?;
    surface.addch(bottom, x, Glyph::BTee)
}
