// ABOUTME: Frame glyphs and cell styles.
// ABOUTME: Maps line, corner, and tee glyphs to box-drawing characters.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    HLine,
    VLine,
    ULCorner,
    URCorner,
    LLCorner,
    LRCorner,
    /// Tee pointing down, joins a vertical line to a top rule
    TTee,
    /// Tee pointing up, joins a vertical line to a bottom rule
    BTee,
    Char(char),
}

impl Glyph {
    pub fn to_char(self) -> char {
        match self {
            Glyph::HLine => '─',
            Glyph::VLine => '│',
            Glyph::ULCorner => '┌',
            Glyph::URCorner => '┐',
            Glyph::LLCorner => '└',
            Glyph::LRCorner => '┘',
            Glyph::TTee => '┬',
            Glyph::BTee => '┴',
            Glyph::Char(c) => c,
        }
    }
}

/// Color context a cell was drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Default,
    /// Frame lines of the browser view
    Border,
}
