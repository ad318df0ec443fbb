// ABOUTME: Browser view layout for colview.
// ABOUTME: Arranges columns under the miller, dual, and long perspectives.

mod bookmark;
mod border;
pub mod engine;
mod error;
mod panel;
mod perspective;
mod ratio;
mod view;

#[cfg(test)]
mod testing;

pub use bookmark::draw_bookmarks;
pub use border::{border_extent, draw_borders, BorderExtent, ColumnEdge};
pub use error::LayoutError;
pub use panel::{Column, Pager, Panel, PanelFactory};
pub use perspective::{LayoutParams, PerspectiveController};
pub use ratio::RatioSet;
pub use view::View;
