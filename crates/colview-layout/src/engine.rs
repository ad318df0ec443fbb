// ABOUTME: Pure geometry distribution for the three perspectives.
// ABOUTME: Maps a viewport and column ratios to per-panel rectangles.

use colview_core::Rect;

use crate::RatioSet;

/// Result of laying out miller columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MillerLayout {
    /// One rectangle per ratio, left to right
    pub columns: Vec<Rect>,
    /// Space from the second-to-last column to the right edge, when there
    /// are at least two columns
    pub pager: Option<Rect>,
}

fn cells(v: i64) -> u16 {
    v.clamp(0, i64::from(u16::MAX)) as u16
}

/// Distribute the viewport width over `ratios`.
///
/// Each column gets `floor(ratio * width)` cells minus one for the separator.
/// The last column absorbs the rounding remainder so the columns always reach
/// the right edge (minus `pad`).
pub fn miller(viewport: Rect, ratios: &RatioSet, pad: u16) -> MillerLayout {
    let width = i64::from(viewport.width);
    let pad_cells = i64::from(pad);
    let height = cells(i64::from(viewport.height) - 2 * pad_cells);
    let last = ratios.len().checked_sub(1);

    let mut layout = MillerLayout {
        columns: Vec::with_capacity(ratios.len()),
        pager: None,
    };
    let mut left = pad_cells;

    for (i, ratio) in ratios.iter().enumerate() {
        let mut wid = (ratio * width as f64).floor() as i64;

        if Some(i) == last {
            wid = width - left + 1 - pad_cells;
        }

        if Some(i + 1) == last {
            layout.pager = Some(Rect::new(
                pad,
                cells(left),
                height,
                cells((width - left - pad_cells).max(1)),
            ));
        }

        layout
            .columns
            .push(Rect::new(pad, cells(left), height, cells((wid - 1).max(1))));

        left += wid;
    }

    layout
}

/// Two equal halves with a one-cell gap
pub fn dual(viewport: Rect) -> [Rect; 2] {
    let half = i64::from(viewport.width) / 2 - 1;
    [
        Rect::new(0, 0, viewport.height, cells(half)),
        Rect::new(0, cells(half + 1), viewport.height, cells(half)),
    ]
}

/// The whole viewport
pub fn long(viewport: Rect) -> Rect {
    Rect::new(0, 0, viewport.height, viewport.width)
}
