// ABOUTME: Placeholder panels for the demo renderer.
// ABOUTME: Columns list numbered entries; the pager shows a fixed caption.

use colview_core::{MouseEvent, Rect};
use colview_grid::{DrawResult, Glyph, Surface};
use colview_layout::{Column, Pager, Panel, PanelFactory};
use tracing::trace;

const ENTRIES: usize = 12;

/// Skip a failed drawing step, leaving a trace record
fn best_effort(result: DrawResult, what: &str) {
    if let Err(err) = result {
        trace!("Skipped {}: {}", what, err);
    }
}

pub struct DemoColumn {
    level: i32,
    rect: Rect,
    visible: bool,
    main: bool,
    infostring: bool,
    previews: bool,
    pointer: usize,
}

impl DemoColumn {
    fn label(&self) -> String {
        let mut label = format!("level {}", self.level);
        if self.main {
            label.push_str(" *");
        }
        label
    }
}

impl Panel for DemoColumn {
    fn geometry(&self) -> Rect {
        self.rect
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn has_preview(&self) -> bool {
        self.previews
    }

    fn paint(&mut self, surface: &mut dyn Surface, _need_redraw: bool) {
        let Rect {
            row,
            col,
            height,
            width,
        } = self.rect;
        if height == 0 || width == 0 {
            return;
        }
        let (row, col, width) = (i32::from(row), i32::from(col), usize::from(width));

        best_effort(surface.addnstr(row, col, &self.label(), width), "label");
        let body = usize::from(height).saturating_sub(1).min(ENTRIES);
        for (index, line) in (1..=body).zip(row + 1..) {
            let marker = if self.main && index - 1 == self.pointer {
                '>'
            } else {
                ' '
            };
            best_effort(
                surface.addnstr(line, col, &format!("{marker}entry {index}"), width),
                "entry",
            );
        }
        if self.infostring && height > 1 {
            best_effort(
                surface.addch(row + i32::from(height) - 1, col, Glyph::Char('i')),
                "infostring",
            );
        }
    }

    fn click(&mut self, event: &MouseEvent) -> bool {
        if let Some(direction) = event.wheel_direction() {
            self.scroll(direction);
            return true;
        }
        let offset = event.row - i32::from(self.rect.row) - 1;
        match usize::try_from(offset) {
            Ok(index) if index < ENTRIES => {
                self.pointer = index;
                true
            }
            _ => false,
        }
    }

    fn destroy(&mut self) {
        trace!(level = self.level, "Column destroyed");
    }
}

impl Column for DemoColumn {
    fn level(&self) -> i32 {
        self.level
    }

    fn is_main_column(&self) -> bool {
        self.main
    }

    fn set_main_column(&mut self, main: bool) {
        self.main = main;
    }

    fn set_display_infostring(&mut self, show: bool) {
        self.infostring = show;
    }

    fn pointer(&self) -> usize {
        self.pointer
    }

    fn scroll_begin(&self) -> usize {
        0
    }

    fn scroll(&mut self, direction: i32) {
        self.pointer = if direction < 0 {
            self.pointer.saturating_sub(1)
        } else {
            (self.pointer + 1).min(ENTRIES - 1)
        };
    }
}

#[derive(Default)]
pub struct DemoPager {
    rect: Rect,
    visible: bool,
    focused: bool,
    open: bool,
}

impl Panel for DemoPager {
    fn geometry(&self) -> Rect {
        self.rect
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn paint(&mut self, surface: &mut dyn Surface, _need_redraw: bool) {
        let caption = if self.open { "[preview]" } else { "[closed]" };
        best_effort(
            surface.addnstr(
                i32::from(self.rect.row),
                i32::from(self.rect.col),
                caption,
                usize::from(self.rect.width),
            ),
            "caption",
        );
    }

    fn destroy(&mut self) {
        trace!("Pager destroyed");
    }
}

impl Pager for DemoPager {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }
}

/// Builds demo panels. With `empty_preview` set, columns right of the
/// current directory report nothing to preview.
pub struct DemoFactory {
    empty_preview: bool,
}

impl DemoFactory {
    pub fn new(empty_preview: bool) -> Self {
        Self { empty_preview }
    }
}

impl PanelFactory for DemoFactory {
    fn column(&mut self, level: i32) -> Box<dyn Column> {
        Box::new(DemoColumn {
            level,
            rect: Rect::default(),
            visible: true,
            main: false,
            infostring: false,
            previews: !(self.empty_preview && level > 0),
            pointer: 0,
        })
    }

    fn pager(&mut self) -> Box<dyn Pager> {
        Box::new(DemoPager::default())
    }
}
