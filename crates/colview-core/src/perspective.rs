// ABOUTME: Layout strategies for the browser view.
// ABOUTME: Miller columns, dual pane, and long listing.

use std::fmt;

/// Active layout strategy. The first entry of `all()` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Perspective {
    /// Several columns with preview and backview
    #[default]
    Miller,
    /// Two columns next to each other
    Dual,
    /// One column with extended information
    Long,
}

impl Perspective {
    pub fn all() -> &'static [Perspective] {
        &[Perspective::Miller, Perspective::Dual, Perspective::Long]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Perspective::Miller => "miller",
            Perspective::Dual => "dual",
            Perspective::Long => "long",
        }
    }

    /// Look up a perspective by its configuration name
    pub fn from_name(name: &str) -> Option<Perspective> {
        Self::all().iter().copied().find(|p| p.name() == name)
    }

    /// Like `from_name`, but unknown names select the default
    pub fn from_name_or_default(name: &str) -> Perspective {
        Self::from_name(name).unwrap_or_default()
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
