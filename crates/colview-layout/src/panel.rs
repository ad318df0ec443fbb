// ABOUTME: Capability traits implemented by the view's child panels.
// ABOUTME: Columns and the pager render their own content; the view only places them.

use colview_core::{MouseEvent, Rect};
use colview_grid::Surface;

/// Anything the view can place and paint
pub trait Panel {
    fn geometry(&self) -> Rect;

    fn set_geometry(&mut self, rect: Rect);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Whether the panel currently shows a preview of something
    fn has_preview(&self) -> bool {
        false
    }

    /// Draw into `surface`. `need_redraw` is set after the surface was erased.
    fn paint(&mut self, surface: &mut dyn Surface, need_redraw: bool);

    /// Handle a click inside the panel, returns true if it was consumed
    fn click(&mut self, _event: &MouseEvent) -> bool {
        false
    }

    /// Release resources before the panel is dropped from the view
    fn destroy(&mut self) {}
}

/// A directory listing at a given depth relative to the current directory
pub trait Column: Panel {
    /// 0 for the current directory, negative for parents, 1 for the preview
    fn level(&self) -> i32;

    fn is_main_column(&self) -> bool;

    fn set_main_column(&mut self, main: bool);

    /// Show extended information about the selected entry
    fn set_display_infostring(&mut self, show: bool);

    /// Index of the selected entry
    fn pointer(&self) -> usize;

    /// Index of the first entry on screen
    fn scroll_begin(&self) -> usize;

    fn scroll(&mut self, direction: i32);
}

/// The preview pane of the miller perspective
pub trait Pager: Panel {
    fn is_focused(&self) -> bool;

    fn set_focused(&mut self, focused: bool);

    /// Called when the pager is shown
    fn open(&mut self);

    /// Called when the pager is hidden
    fn close(&mut self);
}

/// Creates panels whenever a perspective is built
pub trait PanelFactory {
    fn column(&mut self, level: i32) -> Box<dyn Column>;

    fn pager(&mut self) -> Box<dyn Pager>;
}
