// ABOUTME: Recording panel doubles for layout tests.
// ABOUTME: Every lifecycle call is appended to a shared recorder.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use colview_core::{MouseEvent, Rect};
use colview_grid::{Glyph, Surface};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as Area;
use ratatui::style::Style;

use crate::{Column, Pager, Panel, PanelFactory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    CreatedColumn(i32),
    CreatedPager,
    DestroyedColumn(i32),
    DestroyedPager,
    Infostring(i32),
    PaintedColumn(i32, bool),
    PaintedPager(bool),
    ClickedColumn(i32),
    ClickedPager,
    Scrolled(i32, i32),
    Opened,
    Closed,
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub events: Vec<Event>,
    /// Levels whose columns report nothing to preview
    pub no_preview: HashSet<i32>,
    pub consume_clicks: bool,
}

pub(crate) type SharedRecorder = Rc<RefCell<Recorder>>;

impl Recorder {
    pub fn count(recorder: &SharedRecorder, event: &Event) -> usize {
        recorder.borrow().events.iter().filter(|e| *e == event).count()
    }

    pub fn take(recorder: &SharedRecorder) -> Vec<Event> {
        std::mem::take(&mut recorder.borrow_mut().events)
    }
}

/// Unstyled buffer of the given size with `lines` written from the top row
pub(crate) fn screen(height: u16, width: u16, lines: &[&str]) -> Buffer {
    let mut buffer = Buffer::empty(Area::new(0, 0, width, height));
    for (row, line) in (0..height).zip(lines) {
        buffer.set_string(0, row, line, Style::default());
    }
    buffer
}

pub(crate) struct MockColumn {
    recorder: SharedRecorder,
    level: i32,
    rect: Rect,
    visible: bool,
    main: bool,
}

impl Panel for MockColumn {
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
        !self.recorder.borrow().no_preview.contains(&self.level)
    }

    fn paint(&mut self, surface: &mut dyn Surface, need_redraw: bool) {
        let digit = char::from_digit(self.level.unsigned_abs() % 10, 10).unwrap_or('?');
        let _ = surface.addch(
            i32::from(self.rect.row),
            i32::from(self.rect.col),
            Glyph::Char(digit),
        );
        self.recorder
            .borrow_mut()
            .events
            .push(Event::PaintedColumn(self.level, need_redraw));
    }

    fn click(&mut self, _event: &MouseEvent) -> bool {
        let mut recorder = self.recorder.borrow_mut();
        recorder.events.push(Event::ClickedColumn(self.level));
        recorder.consume_clicks
    }

    fn destroy(&mut self) {
        self.recorder
            .borrow_mut()
            .events
            .push(Event::DestroyedColumn(self.level));
    }
}

impl Column for MockColumn {
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
        if show {
            self.recorder
                .borrow_mut()
                .events
                .push(Event::Infostring(self.level));
        }
    }

    fn pointer(&self) -> usize {
        5
    }

    fn scroll_begin(&self) -> usize {
        2
    }

    fn scroll(&mut self, direction: i32) {
        self.recorder
            .borrow_mut()
            .events
            .push(Event::Scrolled(self.level, direction));
    }
}

pub(crate) struct MockPager {
    recorder: SharedRecorder,
    rect: Rect,
    visible: bool,
    focused: bool,
}

impl Panel for MockPager {
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

    fn paint(&mut self, _surface: &mut dyn Surface, need_redraw: bool) {
        self.recorder
            .borrow_mut()
            .events
            .push(Event::PaintedPager(need_redraw));
    }

    fn click(&mut self, _event: &MouseEvent) -> bool {
        let mut recorder = self.recorder.borrow_mut();
        recorder.events.push(Event::ClickedPager);
        recorder.consume_clicks
    }

    fn destroy(&mut self) {
        self.recorder.borrow_mut().events.push(Event::DestroyedPager);
    }
}

impl Pager for MockPager {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn open(&mut self) {
        self.recorder.borrow_mut().events.push(Event::Opened);
    }

    fn close(&mut self) {
        self.recorder.borrow_mut().events.push(Event::Closed);
    }
}

pub(crate) struct MockFactory {
    recorder: SharedRecorder,
}

impl MockFactory {
    pub fn new() -> (Self, SharedRecorder) {
        let recorder = SharedRecorder::default();
        (
            Self {
                recorder: Rc::clone(&recorder),
            },
            recorder,
        )
    }
}

impl PanelFactory for MockFactory {
    fn column(&mut self, level: i32) -> Box<dyn Column> {
        self.recorder
            .borrow_mut()
            .events
            .push(Event::CreatedColumn(level));
        Box::new(MockColumn {
            recorder: Rc::clone(&self.recorder),
            level,
            rect: Rect::default(),
            visible: true,
            main: false,
        })
    }

    fn pager(&mut self) -> Box<dyn Pager> {
        self.recorder.borrow_mut().events.push(Event::CreatedPager);
        Box::new(MockPager {
            recorder: Rc::clone(&self.recorder),
            rect: Rect::default(),
            visible: true,
            focused: false,
        })
    }
}
