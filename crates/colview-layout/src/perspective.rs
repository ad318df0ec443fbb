// ABOUTME: Perspective lifecycle: builds, tears down, and lays out the panel set.
// ABOUTME: A switch always rebuilds every panel and is followed by a resize.

use colview_core::{Perspective, Rect, Settings};

use crate::engine;
use crate::error::best_effort;
use crate::{Column, LayoutError, Pager, PanelFactory, RatioSet};

/// Inputs every resize needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub viewport: Rect,
    pub draw_borders: bool,
    pub collapse_preview: bool,
}

impl LayoutParams {
    pub fn new(viewport: Rect, settings: &Settings) -> Self {
        Self {
            viewport,
            draw_borders: settings.draw_borders,
            collapse_preview: settings.collapse_preview,
        }
    }
}

pub struct PerspectiveController {
    active: Perspective,
    /// Whether a pager is created for the miller perspective
    preview: bool,
    columns: Vec<Box<dyn Column>>,
    main_column: Option<usize>,
    pager: Option<Box<dyn Pager>>,
    ratios: RatioSet,
    stretch_ratios: Option<RatioSet>,
    is_collapsed: bool,
}

impl PerspectiveController {
    /// Controller with no panels yet; call `create` to build them
    pub fn new(preview: bool) -> Self {
        Self {
            active: Perspective::default(),
            preview,
            columns: Vec::new(),
            main_column: None,
            pager: None,
            ratios: RatioSet::default(),
            stretch_ratios: None,
            is_collapsed: false,
        }
    }

    pub fn active(&self) -> Perspective {
        self.active
    }

    pub fn preview(&self) -> bool {
        self.preview
    }

    pub fn columns(&self) -> &[Box<dyn Column>] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Box<dyn Column>] {
        &mut self.columns
    }

    pub fn main_column(&self) -> Option<&dyn Column> {
        self.main_column
            .and_then(|i| self.columns.get(i))
            .map(|c| c.as_ref())
    }

    pub fn main_column_mut(&mut self) -> Option<&mut (dyn Column + 'static)> {
        match self.main_column {
            Some(i) => self.columns.get_mut(i).map(|c| c.as_mut()),
            None => None,
        }
    }

    pub fn pager(&self) -> Option<&dyn Pager> {
        self.pager.as_deref()
    }

    pub fn pager_mut(&mut self) -> Option<&mut (dyn Pager + 'static)> {
        self.pager.as_deref_mut()
    }

    pub fn pager_visible(&self) -> bool {
        self.pager.as_ref().is_some_and(|p| p.is_visible())
    }

    pub fn ratios(&self) -> &RatioSet {
        &self.ratios
    }

    pub fn stretch_ratios(&self) -> Option<&RatioSet> {
        self.stretch_ratios.as_ref()
    }

    /// Collapse state used by the last miller layout
    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    /// Build the panel set for `which` and lay it out. Panels from an
    /// earlier build are destroyed once the request has been validated.
    pub fn create(
        &mut self,
        which: Perspective,
        ratios: &[f64],
        factory: &mut dyn PanelFactory,
        params: LayoutParams,
    ) -> Result<(), LayoutError> {
        match which {
            Perspective::Miller => {
                // validate before touching any state
                let ratios = RatioSet::normalize(ratios)?;
                self.destroy();
                self.create_miller(ratios, factory);
            }
            Perspective::Dual => {
                self.destroy();
                self.create_dual(factory);
            }
            Perspective::Long => {
                self.destroy();
                self.create_long(factory);
            }
        }
        self.active = which;
        tracing::info!(
            "Created {} perspective with {} columns",
            which,
            self.columns.len()
        );

        self.resize(params);
        Ok(())
    }

    fn create_dual(&mut self, factory: &mut dyn PanelFactory) {
        self.columns = vec![factory.column(0), factory.column(0)];
        self.main_column = Some(0);
    }

    fn create_long(&mut self, factory: &mut dyn PanelFactory) {
        self.columns = vec![factory.column(0)];
        self.main_column = Some(0);
    }

    fn create_miller(&mut self, ratios: RatioSet, factory: &mut dyn PanelFactory) {
        let mut pager = factory.pager();
        pager.set_visible(false);
        self.pager = Some(pager);

        self.stretch_ratios = ratios.stretch();
        let count = ratios.len() as i32;
        self.ratios = ratios;

        // levels run up to 0, or up to 1 when the last column is the preview
        let offset = 1 - count + i32::from(self.preview);
        self.columns = (0..count).map(|level| factory.column(level + offset)).collect();

        let from_end = if self.preview { 2 } else { 1 };
        self.main_column = self.columns.len().checked_sub(from_end);
        if let Some(main) = self.main_column_mut() {
            main.set_display_infostring(true);
            main.set_main_column(true);
        }
    }

    /// Destroy every panel and forget the main column
    pub fn destroy(&mut self) {
        for mut column in self.columns.drain(..) {
            column.destroy();
        }
        self.main_column = None;
        if let Some(mut pager) = self.pager.take() {
            pager.destroy();
        }
        self.ratios = RatioSet::default();
        self.stretch_ratios = None;
        self.is_collapsed = false;
    }

    /// React to a perspective change from `previous` to `requested`.
    /// Returns whether the panel set was rebuilt.
    pub fn change(
        &mut self,
        previous: &str,
        requested: &str,
        ratios: &[f64],
        factory: &mut dyn PanelFactory,
        params: LayoutParams,
    ) -> Result<bool, LayoutError> {
        if previous == requested {
            return Ok(false);
        }
        let which = Perspective::from_name(requested)
            .ok_or_else(|| LayoutError::InvalidPerspective(requested.to_string()))?;
        self.create(which, ratios, factory, params)?;
        Ok(true)
    }

    /// Rebuild the miller columns with new ratios. Other perspectives only
    /// validate them. Returns whether the panel set was rebuilt.
    pub fn change_ratios(
        &mut self,
        ratios: &[f64],
        factory: &mut dyn PanelFactory,
        params: LayoutParams,
    ) -> Result<bool, LayoutError> {
        RatioSet::normalize(ratios)?;
        if self.active != Perspective::Miller {
            return Ok(false);
        }

        self.create(Perspective::Miller, ratios, factory, params)?;
        Ok(true)
    }

    /// Whether the last column should be cut off because it has nothing to
    /// preview
    pub fn should_collapse(&self, collapse_preview: bool) -> bool {
        collapse_preview
            && self.preview
            && self.columns.last().is_some_and(|c| !c.has_preview())
            && self.stretch_ratios.is_some()
    }

    /// Reassign geometry to every panel
    pub fn resize(&mut self, params: LayoutParams) {
        tracing::debug!(
            "Resizing {} perspective to {}x{}",
            self.active,
            params.viewport.width,
            params.viewport.height
        );
        match self.active {
            Perspective::Miller => self.resize_miller(params),
            Perspective::Dual => self.resize_dual(params.viewport),
            Perspective::Long => self.resize_long(params.viewport),
        }
    }

    fn resize_miller(&mut self, params: LayoutParams) {
        let pad = u16::from(params.draw_borders);
        self.is_collapsed = self.should_collapse(params.collapse_preview);

        let ratios = match (&self.stretch_ratios, self.is_collapsed) {
            (Some(stretch), true) => stretch,
            _ => &self.ratios,
        };
        let layout = engine::miller(params.viewport, ratios, pad);

        if let (Some(pager), Some(rect)) = (self.pager.as_mut(), layout.pager) {
            pager.set_geometry(rect);
        }
        for (i, rect) in layout.columns.into_iter().enumerate() {
            match self.columns.get_mut(i) {
                Some(column) => column.set_geometry(rect),
                None => best_effort(Err(LayoutError::MissingPanel("miller column")), "column"),
            }
        }
    }

    fn resize_dual(&mut self, viewport: Rect) {
        let rects = engine::dual(viewport);
        if self.columns.len() < rects.len() {
            best_effort(Err(LayoutError::MissingPanel("dual column")), "dual layout");
        }
        for (column, rect) in self.columns.iter_mut().zip(rects) {
            column.set_geometry(rect);
        }
    }

    fn resize_long(&mut self, viewport: Rect) {
        match self.columns.first_mut() {
            Some(column) => column.set_geometry(engine::long(viewport)),
            None => best_effort(Err(LayoutError::MissingPanel("long column")), "long layout"),
        }
    }

    /// Re-run the layout if the collapse state no longer matches the columns.
    /// Returns whether a resize happened.
    pub fn poke(&mut self, params: LayoutParams) -> bool {
        if !self.preview || self.is_collapsed == self.should_collapse(params.collapse_preview) {
            return false;
        }
        tracing::debug!("Collapse state changed, relayout");
        self.resize(params);
        true
    }
}

impl Drop for PerspectiveController {
    fn drop(&mut self) {
        self.destroy();
    }
}
