// ABOUTME: Error taxonomy for layout and drawing.
// ABOUTME: Only perspective and ratio errors reach callers; the rest are logged.

use colview_grid::DrawError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("No such perspective: {0}")]
    InvalidPerspective(String),

    #[error("Invalid column ratios: {0}")]
    InvalidRatios(String),

    #[error("Drawing outside the surface: {0}")]
    GeometryOutOfBounds(#[from] DrawError),

    #[error("Missing panel: {0}")]
    MissingPanel(&'static str),

    #[error("No bookmarks to show")]
    EmptyBookmarkSet,
}

/// Discard a failed best-effort drawing step
pub(crate) fn best_effort<E: Into<LayoutError>>(result: Result<(), E>, what: &str) {
    if let Err(err) = result {
        let err: LayoutError = err.into();
        tracing::trace!("Skipped {}: {}", what, err);
    }
}
