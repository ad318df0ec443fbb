// ABOUTME: The browser view: owns the surface, the panel set, and redraw state.
// ABOUTME: Reacts to option signals, paints panels and frames, and places the cursor.

use colview_core::setting::{setopt_key, MOVE_KEY};
use colview_core::signal::DEFAULT_PRIORITY;
use colview_core::{
    Bookmarks, MouseEvent, Perspective, Rect, Setting, Settings, Signal, SignalDispatcher,
};
use colview_grid::Surface;

use crate::{
    draw_bookmarks, draw_borders, Column, LayoutError, LayoutParams, Pager, PanelFactory,
    PerspectiveController,
};

/// The perspective switch runs after handlers with the default priority
const PERSPECTIVE_PRIORITY: f32 = 0.1;

/// Reactions the view binds to signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    RequestClear,
    RequestClearIfBorders,
    ChangeRatios,
    ChangePerspective,
    Relayout,
}

pub struct View<S: Surface> {
    surface: S,
    rect: Rect,
    settings: Settings,
    bookmarks: Bookmarks,
    factory: Box<dyn PanelFactory>,
    controller: PerspectiveController,
    subscriptions: SignalDispatcher<Handler>,
    need_clear: bool,
    need_redraw: bool,
    draw_bookmarks: bool,
}

impl<S: Surface> View<S> {
    /// Build the view over the whole of `surface`. `ratios` replaces the
    /// configured column ratios; `preview` decides whether the miller
    /// perspective gets a pager.
    pub fn new(
        surface: S,
        ratios: &[f64],
        preview: bool,
        mut settings: Settings,
        factory: Box<dyn PanelFactory>,
    ) -> Result<Self, LayoutError> {
        let (height, width) = surface.size();
        settings.column_ratios = ratios.to_vec();

        let mut view = Self {
            surface,
            rect: Rect::new(0, 0, height, width),
            settings,
            bookmarks: Bookmarks::new(),
            factory,
            controller: PerspectiveController::new(preview),
            subscriptions: SignalDispatcher::new(),
            need_clear: false,
            need_redraw: false,
            draw_bookmarks: false,
        };

        let params = view.params();
        view.controller.create(
            view.settings.perspective(),
            &view.settings.column_ratios,
            view.factory.as_mut(),
            params,
        )?;
        view.bind_signals();
        Ok(view)
    }

    fn bind_signals(&mut self) {
        let subs = &mut self.subscriptions;
        for option in ["preview_directories", "preview_files"] {
            subs.bind(
                setopt_key(option),
                Handler::RequestClearIfBorders,
                DEFAULT_PRIORITY,
            );
        }
        subs.bind(MOVE_KEY, Handler::RequestClear, DEFAULT_PRIORITY);
        subs.bind(
            setopt_key("column_ratios"),
            Handler::RequestClear,
            DEFAULT_PRIORITY,
        );
        subs.bind(
            setopt_key("column_ratios"),
            Handler::ChangeRatios,
            DEFAULT_PRIORITY,
        );
        subs.bind(
            setopt_key("perspective"),
            Handler::ChangePerspective,
            PERSPECTIVE_PRIORITY,
        );
        for option in ["draw_borders", "collapse_preview"] {
            subs.bind(setopt_key(option), Handler::RequestClear, DEFAULT_PRIORITY);
            subs.bind(setopt_key(option), Handler::Relayout, DEFAULT_PRIORITY);
        }
    }

    fn params(&self) -> LayoutParams {
        LayoutParams::new(self.rect, &self.settings)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn perspective(&self) -> Perspective {
        self.controller.active()
    }

    pub fn columns(&self) -> &[Box<dyn Column>] {
        self.controller.columns()
    }

    pub fn main_column(&self) -> Option<&dyn Column> {
        self.controller.main_column()
    }

    pub fn pager(&self) -> Option<&dyn Pager> {
        self.controller.pager()
    }

    pub fn is_collapsed(&self) -> bool {
        self.controller.is_collapsed()
    }

    pub fn need_clear(&self) -> bool {
        self.need_clear
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    pub fn set_bookmarks(&mut self, bookmarks: Bookmarks) {
        self.bookmarks = bookmarks;
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Deliver a signal to the bound handlers. An option change is stored
    /// before the handlers run; if one of them fails the settings and the
    /// pending clear request are rolled back.
    pub fn notify(&mut self, signal: &Signal) -> Result<(), LayoutError> {
        let key = signal.key();
        let handlers = self.subscriptions.handlers(&key);
        let saved = self.settings.clone();
        let saved_clear = self.need_clear;
        if let Signal::SettingChanged { value, .. } = signal {
            self.settings.apply(value.clone());
        }

        for handler in handlers {
            if let Err(err) = self.handle(handler, signal) {
                tracing::warn!("Rejected {}: {}", key, err);
                self.settings = saved;
                self.need_clear = saved_clear;
                return Err(err);
            }
        }
        Ok(())
    }

    /// Change one option and notify the handlers bound to it
    pub fn set_option(&mut self, value: Setting) -> Result<(), LayoutError> {
        let signal = self.settings.change(value);
        self.notify(&signal)
    }

    fn handle(&mut self, handler: Handler, signal: &Signal) -> Result<(), LayoutError> {
        match (handler, signal) {
            (Handler::RequestClear, _) => self.request_clear(),
            (Handler::RequestClearIfBorders, _) => {
                if self.settings.draw_borders {
                    self.request_clear();
                }
            }
            (Handler::Relayout, _) => self.resize(self.rect),
            (
                Handler::ChangeRatios,
                Signal::SettingChanged {
                    value: Setting::ColumnRatios(ratios),
                    ..
                },
            ) => {
                let params = self.params();
                self.controller
                    .change_ratios(ratios, self.factory.as_mut(), params)?;
            }
            (
                Handler::ChangePerspective,
                Signal::SettingChanged {
                    previous: Setting::Perspective(previous),
                    value: Setting::Perspective(requested),
                },
            ) => {
                let params = self.params();
                let rebuilt = self.controller.change(
                    previous,
                    requested,
                    &self.settings.column_ratios,
                    self.factory.as_mut(),
                    params,
                )?;
                if rebuilt {
                    self.request_clear();
                }
            }
            (Handler::ChangeRatios | Handler::ChangePerspective, _) => {}
        }
        Ok(())
    }

    /// Erase the surface on the next draw
    pub fn request_clear(&mut self) {
        self.need_clear = true;
    }

    /// Move the view and lay out every panel again
    pub fn resize(&mut self, rect: Rect) {
        self.rect = rect;
        let params = self.params();
        self.controller.resize(params);
    }

    /// Re-check whether the last column should collapse
    pub fn poke(&mut self) {
        let params = self.params();
        self.controller.poke(params);
    }

    pub fn show_bookmarks(&mut self) {
        self.draw_bookmarks = true;
    }

    pub fn hide_bookmarks(&mut self) {
        self.draw_bookmarks = false;
    }

    pub fn bookmarks_visible(&self) -> bool {
        self.draw_bookmarks
    }

    pub fn draw(&mut self) {
        if self.draw_bookmarks {
            self.draw_bookmark_overlay();
            return;
        }

        if self.need_clear {
            self.surface.erase();
            self.need_redraw = true;
            self.need_clear = false;
        }
        let need_redraw = self.need_redraw;

        if let Some(pager) = self.controller.pager_mut() {
            if pager.is_visible() {
                pager.paint(&mut self.surface, need_redraw);
            }
        }
        for column in self.controller.columns_mut() {
            if column.is_visible() {
                column.paint(&mut self.surface, need_redraw);
            }
        }

        if self.settings.draw_borders {
            draw_borders(
                &mut self.surface,
                self.controller.columns(),
                self.controller.pager_visible(),
                self.rect.height,
                self.rect.width,
            );
        }
        self.need_redraw = false;
    }

    fn draw_bookmark_overlay(&mut self) {
        self.need_clear = true;
        let drawn = draw_bookmarks(
            &mut self.surface,
            &self.bookmarks,
            self.settings.show_hidden_bookmarks,
            self.settings.draw_bookmark_borders,
            self.rect.height,
            self.rect.width,
        );
        if let Err(err) = drawn {
            tracing::trace!("Bookmark overlay skipped: {}", err);
        }
    }

    /// Place the cursor on the selected entry of the main column
    pub fn finalize(&mut self) {
        if let Err(err) = self.place_cursor() {
            tracing::trace!("Cursor not placed: {}", err);
        }
    }

    fn place_cursor(&mut self) -> Result<(), LayoutError> {
        let pager_visible = self.controller.pager_visible();
        let main = self
            .controller
            .main_column()
            .ok_or(LayoutError::MissingPanel("main column"))?;
        let rect = main.geometry();

        let mut row = i64::from(rect.row);
        if !pager_visible {
            row += main.pointer() as i64 - main.scroll_begin() as i64;
        }
        let row = i32::try_from(row).unwrap_or(i32::MAX);

        self.surface.move_cursor(row, i32::from(rect.col))?;
        Ok(())
    }

    /// Offer a click to the panels, then turn unhandled wheel events into
    /// scrolling of the main column. Returns whether a panel consumed it.
    pub fn click(&mut self, event: &MouseEvent) -> bool {
        if self.click_panels(event) {
            return true;
        }
        if let Some(direction) = event.wheel_direction() {
            match self.controller.main_column_mut() {
                Some(main) => main.scroll(direction),
                None => {
                    tracing::trace!("Scroll ignored: {}", LayoutError::MissingPanel("main column"));
                }
            }
        }
        false
    }

    fn click_panels(&mut self, event: &MouseEvent) -> bool {
        if let Some(pager) = self.controller.pager_mut() {
            let hit = pager.is_focused() || pager.geometry().contains(event.row, event.col);
            if pager.is_visible() && hit && pager.click(event) {
                return true;
            }
        }
        self.controller.columns_mut().iter_mut().any(|column| {
            column.is_visible()
                && column.geometry().contains(event.row, event.col)
                && column.click(event)
        })
    }

    pub fn open_pager(&mut self) {
        let Some(pager) = self.controller.pager_mut() else {
            tracing::trace!("Pager not opened: {}", LayoutError::MissingPanel("pager"));
            return;
        };
        pager.set_visible(true);
        pager.set_focused(true);
        pager.open();
        self.need_clear = true;
        self.set_trailing_columns_visible(false);
    }

    pub fn close_pager(&mut self) {
        let Some(pager) = self.controller.pager_mut() else {
            tracing::trace!("Pager not closed: {}", LayoutError::MissingPanel("pager"));
            return;
        };
        pager.set_visible(false);
        pager.set_focused(false);
        pager.close();
        self.need_clear = true;
        self.set_trailing_columns_visible(true);
    }

    /// The pager covers the last two columns
    fn set_trailing_columns_visible(&mut self, visible: bool) {
        let columns = self.controller.columns_mut();
        if columns.len() < 2 {
            tracing::trace!("Fewer than two columns: {}", LayoutError::MissingPanel("column"));
        }
        for column in columns.iter_mut().rev().take(2) {
            column.set_visible(visible);
        }
    }

    /// Drop every panel and subscription
    pub fn destroy(&mut self) {
        self.controller.destroy();
        self.subscriptions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{screen, Event, MockFactory, Recorder, SharedRecorder};
    use colview_core::{MouseButton, MouseKind};
    use colview_grid::BufferSurface;
    use ratatui::buffer::Buffer;
    use ratatui::style::Modifier;

    fn view_with(settings: Settings, preview: bool) -> (View<BufferSurface>, SharedRecorder) {
        let (factory, recorder) = MockFactory::new();
        let ratios = settings.column_ratios.clone();
        let view = View::new(
            BufferSurface::new(10, 40),
            &ratios,
            preview,
            settings,
            Box::new(factory),
        )
        .unwrap();
        (view, recorder)
    }

    fn miller() -> (View<BufferSurface>, SharedRecorder) {
        view_with(Settings::default(), true)
    }

    fn destroyed(recorder: &SharedRecorder) -> usize {
        recorder
            .borrow()
            .events
            .iter()
            .filter(|e| matches!(e, Event::DestroyedColumn(_) | Event::DestroyedPager))
            .count()
    }

    #[test]
    fn starts_with_configured_perspective() {
        let settings = Settings {
            perspective: "dual".into(),
            ..Settings::default()
        };
        let (view, _recorder) = view_with(settings, true);
        assert_eq!(view.perspective(), Perspective::Dual);
        assert_eq!(view.columns().len(), 2);
        assert_eq!(view.subscription_count(), 10);
    }

    #[test]
    fn unknown_configured_perspective_starts_miller() {
        let settings = Settings {
            perspective: "grid".into(),
            ..Settings::default()
        };
        let (view, _recorder) = view_with(settings, true);
        assert_eq!(view.perspective(), Perspective::Miller);
        assert_eq!(view.columns().len(), 3);
    }

    #[test]
    fn constructor_ratios_replace_configured_ones() {
        let (factory, _recorder) = MockFactory::new();
        let view = View::new(
            BufferSurface::new(10, 40),
            &[1.0, 1.0],
            false,
            Settings::default(),
            Box::new(factory),
        )
        .unwrap();
        assert_eq!(view.settings().column_ratios, vec![1.0, 1.0]);
        assert_eq!(view.columns().len(), 2);
    }

    #[test]
    fn invalid_constructor_ratios_are_rejected() {
        let (factory, _recorder) = MockFactory::new();
        let result = View::new(
            BufferSurface::new(10, 40),
            &[0.0],
            true,
            Settings::default(),
            Box::new(factory),
        );
        assert!(matches!(result, Err(LayoutError::InvalidRatios(_))));
    }

    #[test]
    fn perspective_option_switches_layout() {
        let (mut view, recorder) = miller();
        view.set_option(Setting::Perspective("long".into())).unwrap();

        assert_eq!(view.perspective(), Perspective::Long);
        assert_eq!(view.settings().perspective, "long");
        assert_eq!(destroyed(&recorder), 4);
        assert_eq!(view.columns()[0].geometry(), Rect::new(0, 0, 10, 40));
        assert!(view.pager().is_none());
        assert!(view.need_clear());
    }

    #[test]
    fn unknown_perspective_option_is_rejected() {
        let (mut view, recorder) = miller();
        let err = view
            .set_option(Setting::Perspective("grid".into()))
            .unwrap_err();

        assert!(matches!(err, LayoutError::InvalidPerspective(_)));
        assert_eq!(view.settings().perspective, "miller");
        assert_eq!(view.perspective(), Perspective::Miller);
        assert_eq!(view.columns().len(), 3);
        assert_eq!(destroyed(&recorder), 0);
    }

    #[test]
    fn same_perspective_is_a_noop() {
        let (mut view, recorder) = miller();
        view.set_option(Setting::Perspective("miller".into())).unwrap();
        assert_eq!(destroyed(&recorder), 0);
        assert!(!view.need_clear());
    }

    #[test]
    fn ratio_option_rebuilds_columns() {
        let (mut view, _recorder) = miller();
        view.set_option(Setting::ColumnRatios(vec![1.0, 1.0, 1.0, 1.0]))
            .unwrap();
        assert_eq!(view.columns().len(), 4);
        assert_eq!(view.settings().column_ratios, vec![1.0; 4]);
        assert!(view.need_clear());
    }

    #[test]
    fn invalid_ratio_option_is_rolled_back() {
        let (mut view, _recorder) = miller();
        let err = view
            .set_option(Setting::ColumnRatios(vec![1.0, f64::INFINITY]))
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidRatios(_)));
        assert_eq!(view.settings().column_ratios, vec![1.0, 3.0, 4.0]);
        assert_eq!(view.columns().len(), 3);
        assert!(!view.need_clear());
    }

    #[test]
    fn rejected_change_keeps_an_earlier_clear_request() {
        let (mut view, _recorder) = miller();
        view.request_clear();
        assert!(view
            .set_option(Setting::ColumnRatios(vec![0.0, 1.0]))
            .is_err());
        assert!(view.need_clear());
    }

    #[test]
    fn preview_options_clear_only_with_borders() {
        let (mut view, _recorder) = miller();
        view.set_option(Setting::PreviewFiles(false)).unwrap();
        assert!(!view.need_clear());
        assert!(!view.settings().preview_files);

        let settings = Settings {
            draw_borders: true,
            ..Settings::default()
        };
        let (mut view, _recorder) = view_with(settings, true);
        view.set_option(Setting::PreviewDirectories(false)).unwrap();
        assert!(view.need_clear());
    }

    #[test]
    fn moving_requests_clear() {
        let (mut view, _recorder) = miller();
        view.notify(&Signal::Moved).unwrap();
        assert!(view.need_clear());
    }

    #[test]
    fn border_option_relayouts_with_padding() {
        let (mut view, _recorder) = miller();
        assert_eq!(view.columns()[0].geometry(), Rect::new(0, 0, 10, 4));

        view.set_option(Setting::DrawBorders(true)).unwrap();
        assert_eq!(view.columns()[0].geometry(), Rect::new(1, 1, 8, 4));
        assert!(view.need_clear());
    }

    #[test]
    fn draw_consumes_clear_request() {
        let (mut view, recorder) = miller();
        view.request_clear();
        view.draw();
        assert!(!view.need_clear());
        assert_eq!(Recorder::count(&recorder, &Event::PaintedColumn(0, true)), 1);
        assert_eq!(Recorder::count(&recorder, &Event::PaintedPager(true)), 0);

        view.draw();
        assert_eq!(Recorder::count(&recorder, &Event::PaintedColumn(0, false)), 1);
    }

    #[test]
    fn draw_frames_columns() {
        let settings = Settings {
            draw_borders: true,
            ..Settings::default()
        };
        let (mut view, _recorder) = view_with(settings, true);
        view.draw();

        assert_eq!(
            view.surface().unstyled(),
            Buffer::with_lines([
                "┌────┬──────────────┬──────────────────┐",
                "│1   │0             │1                 │",
                "│    │              │                  │",
                "│    │              │                  │",
                "│    │              │                  │",
                "│    │              │                  │",
                "│    │              │                  │",
                "│    │              │                  │",
                "│    │              │                  │",
                "└────┴──────────────┴──────────────────┘",
            ])
        );
        let corner = &view.surface().buffer()[(0_u16, 0_u16)];
        assert!(corner.modifier.contains(Modifier::DIM));
    }

    #[test]
    fn open_pager_frame_stops_at_main_column() {
        let settings = Settings {
            draw_borders: true,
            ..Settings::default()
        };
        let (mut view, _recorder) = view_with(settings, true);
        let main_right = view.main_column().unwrap().geometry().right();
        view.open_pager();
        view.draw();

        assert_eq!(
            view.surface().unstyled(),
            Buffer::with_lines([
                "┌────┬─────────────────────────────────┐",
                "│1   │                                 │",
                "│    │                                 │",
                "│    │                                 │",
                "│    │                                 │",
                "│    │                                 │",
                "│    │                                 │",
                "│    │                                 │",
                "│    │                                 │",
                "└────┴─────────────────────────────────┘",
            ])
        );
        let buffer = view.surface().buffer();
        let main_right = u16::try_from(main_right).unwrap();
        assert_eq!(buffer[(main_right, 0_u16)].symbol(), "─");
        assert_eq!(buffer[(main_right, 9_u16)].symbol(), "─");
        assert_eq!(buffer[(39_u16, 4_u16)].symbol(), "│");
    }

    #[test]
    fn pager_hides_last_two_columns() {
        let (mut view, recorder) = miller();
        view.open_pager();

        let visible: Vec<bool> = view.columns().iter().map(|c| c.is_visible()).collect();
        assert_eq!(visible, vec![true, false, false]);
        let pager = view.pager().unwrap();
        assert!(pager.is_visible());
        assert!(pager.is_focused());
        assert!(view.need_clear());
        assert_eq!(Recorder::count(&recorder, &Event::Opened), 1);

        view.draw();
        assert_eq!(Recorder::count(&recorder, &Event::PaintedPager(true)), 1);
        assert_eq!(Recorder::count(&recorder, &Event::PaintedColumn(0, true)), 0);

        view.close_pager();
        let visible: Vec<bool> = view.columns().iter().map(|c| c.is_visible()).collect();
        assert_eq!(visible, vec![true, true, true]);
        assert!(!view.pager().unwrap().is_visible());
        assert!(!view.pager().unwrap().is_focused());
        assert_eq!(Recorder::count(&recorder, &Event::Closed), 1);
    }

    #[test]
    fn pager_with_single_column() {
        let (factory, _recorder) = MockFactory::new();
        let mut view = View::new(
            BufferSurface::new(10, 40),
            &[1.0],
            true,
            Settings::default(),
            Box::new(factory),
        )
        .unwrap();
        view.open_pager();
        assert!(!view.columns()[0].is_visible());
        view.close_pager();
        assert!(view.columns()[0].is_visible());
    }

    #[test]
    fn pager_toggle_without_pager_is_ignored() {
        let settings = Settings {
            perspective: "long".into(),
            ..Settings::default()
        };
        let (mut view, recorder) = view_with(settings, true);
        view.open_pager();
        assert!(view.columns()[0].is_visible());
        assert!(!view.need_clear());
        assert_eq!(Recorder::count(&recorder, &Event::Opened), 0);
    }

    #[test]
    fn cursor_follows_selected_entry() {
        let (mut view, _recorder) = miller();
        view.finalize();
        // main column at (0, 5); pointer 5, scrolled by 2
        assert_eq!(view.surface().cursor(), Some((3, 5)));

        view.open_pager();
        view.finalize();
        assert_eq!(view.surface().cursor(), Some((0, 5)));
    }

    #[test]
    fn zero_ratios_leave_view_empty() {
        let (factory, _recorder) = MockFactory::new();
        let mut view = View::new(
            BufferSurface::new(10, 40),
            &[],
            true,
            Settings::default(),
            Box::new(factory),
        )
        .unwrap();
        assert!(view.columns().is_empty());
        assert!(view.main_column().is_none());

        view.resize(Rect::new(0, 0, 5, 20));
        view.draw();
        view.finalize();
        assert_eq!(view.surface().cursor(), None);
        assert!(!view.click(&MouseEvent::new(1, 1, MouseKind::WheelDown)));
    }

    #[test]
    fn wheel_scrolls_main_column() {
        let (mut view, recorder) = miller();
        Recorder::take(&recorder);
        let handled = view.click(&MouseEvent::new(2, 1, MouseKind::WheelDown));
        assert!(!handled);
        assert_eq!(Recorder::count(&recorder, &Event::ClickedColumn(-1)), 1);
        assert_eq!(Recorder::count(&recorder, &Event::Scrolled(0, 1)), 1);

        let handled = view.click(&MouseEvent::new(2, 1, MouseKind::Press(MouseButton::Left)));
        assert!(!handled);
        assert_eq!(Recorder::take(&recorder).len(), 3);
    }

    #[test]
    fn consumed_click_does_not_scroll() {
        let (mut view, recorder) = miller();
        recorder.borrow_mut().consume_clicks = true;
        assert!(view.click(&MouseEvent::new(2, 25, MouseKind::WheelUp)));
        assert_eq!(Recorder::count(&recorder, &Event::ClickedColumn(1)), 1);
        assert_eq!(Recorder::count(&recorder, &Event::Scrolled(0, -1)), 0);

        // outside every panel
        assert!(!view.click(&MouseEvent::new(50, 50, MouseKind::WheelUp)));
        assert_eq!(Recorder::count(&recorder, &Event::Scrolled(0, -1)), 1);
    }

    #[test]
    fn focused_pager_gets_clicks_first() {
        let (mut view, recorder) = miller();
        recorder.borrow_mut().consume_clicks = true;
        view.open_pager();
        Recorder::take(&recorder);

        assert!(view.click(&MouseEvent::new(2, 1, MouseKind::Press(MouseButton::Left))));
        assert_eq!(Recorder::take(&recorder), vec![Event::ClickedPager]);
    }

    #[test]
    fn bookmark_overlay_replaces_columns() {
        let (mut view, recorder) = miller();
        view.set_bookmarks([("b", "/.hidden/y"), ("a", "/x")].into_iter().collect());
        view.set_option(Setting::ShowHiddenBookmarks(false)).unwrap();
        view.show_bookmarks();
        view.draw();

        assert!(view.bookmarks_visible());
        assert_eq!(
            view.surface().unstyled(),
            screen(10, 40, &[" a: /x │", "───────┘"])
        );
        assert_eq!(Recorder::count(&recorder, &Event::PaintedColumn(0, false)), 0);
        assert!(view.need_clear());

        view.hide_bookmarks();
        view.draw();
        assert_eq!(view.surface().row_text(1), "");
        assert_eq!(Recorder::count(&recorder, &Event::PaintedColumn(0, true)), 1);
    }

    #[test]
    fn poke_collapses_when_preview_disappears() {
        let (mut view, recorder) = miller();
        assert!(!view.is_collapsed());
        recorder.borrow_mut().no_preview.insert(1);
        view.poke();
        assert!(view.is_collapsed());

        view.set_option(Setting::CollapsePreview(false)).unwrap();
        assert!(!view.is_collapsed());
    }

    #[test]
    fn destroy_releases_panels_and_subscriptions() {
        let (mut view, recorder) = miller();
        view.destroy();
        assert_eq!(destroyed(&recorder), 4);
        assert_eq!(view.subscription_count(), 0);
        assert!(view.columns().is_empty());

        drop(view);
        assert_eq!(destroyed(&recorder), 4);
    }
}
