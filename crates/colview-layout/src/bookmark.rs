// ABOUTME: Full-screen bookmark listing drawn instead of the columns.
// ABOUTME: One sorted entry per line, optionally closed off with a frame.

use colview_core::Bookmarks;
use colview_grid::{Glyph, Surface};
use unicode_width::UnicodeWidthStr;

use crate::error::best_effort;
use crate::LayoutError;

/// Extra cells reserved next to the longest path for " k: "
const KEY_PADDING: usize = 5;

/// Draw the bookmark listing into a `height` x `width` area. Returns the
/// number of entries drawn, or `EmptyBookmarkSet` if there was nothing to
/// show.
pub fn draw_bookmarks(
    surface: &mut dyn Surface,
    bookmarks: &Bookmarks,
    show_hidden: bool,
    draw_borders: bool,
    height: u16,
    width: u16,
) -> Result<usize, LayoutError> {
    // the last line is left for the frame
    let rows = usize::from(height).saturating_sub(1);
    let listing = bookmarks.visible(show_hidden).take(rows).enumerate();

    let longest = listing
        .clone()
        .map(|(_, (_, path))| path.to_string_lossy().width())
        .max()
        .ok_or(LayoutError::EmptyBookmarkSet)?;
    let maxlen = (longest + KEY_PADDING).min(usize::from(width));

    surface.reset_style();
    let whitespace = " ".repeat(maxlen);
    let mut last_line = 0;
    let mut drawn = 0;
    for (line, (key, path)) in listing {
        let row = line as i32;
        let text = format!(" {}: {}", key, path.display());
        best_effort(surface.addstr(row, 0, &whitespace), "bookmark background");
        best_effort(
            surface.addnstr(row, 0, &text, usize::from(width)),
            "bookmark entry",
        );
        last_line = row;
        drawn += 1;
    }

    if draw_borders {
        let edge = maxlen as i32;
        best_effort(
            surface.hline(last_line + 1, 0, Glyph::HLine, edge),
            "bookmark rule",
        );
        if maxlen < usize::from(width) {
            best_effort(
                surface.vline(0, edge, Glyph::VLine, last_line + 1),
                "bookmark rule",
            );
            best_effort(
                surface.addch(last_line + 1, edge, Glyph::LRCorner),
                "bookmark corner",
            );
        }
    }

    Ok(drawn)
}
