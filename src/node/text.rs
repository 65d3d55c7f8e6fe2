//! Text node properties
//!
//! A text node's characters are split into styled runs. Node-level font
//! properties report [`Mixed::Mixed`] when runs disagree.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

// =============================================================================
// FontName
// =============================================================================

/// Font identity: family plus style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: CompactString,
    pub style: CompactString,
}

impl FontName {
    pub fn new(family: impl Into<CompactString>, style: impl Into<CompactString>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// Regular style of `family`
    pub fn regular(family: impl Into<CompactString>) -> Self {
        Self::new(family, "Regular")
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

// =============================================================================
// Mixed / LineHeight
// =============================================================================

/// A node-level property that is either uniform or varies across runs
#[derive(Debug, Clone, PartialEq)]
pub enum Mixed<T> {
    Uniform(T),
    Mixed,
}

impl<T> Mixed<T> {
    impl_enum_accessors!(uniform => Uniform(T));

    /// Check for the mixed marker
    pub fn is_mixed(&self) -> bool {
        matches!(self, Self::Mixed)
    }
}

/// Line height of a text node
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineHeight {
    #[default]
    Auto,
    Pixels(f64),
    Percent(f64),
    Mixed,
}

// =============================================================================
// TextRun / TextProps
// =============================================================================

/// A span of characters sharing one font and size
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Length in characters
    pub len: usize,
    pub font: FontName,
    pub size: f64,
}

impl TextRun {
    pub fn new(len: usize, font: FontName, size: f64) -> Self {
        Self { len, font, size }
    }
}

/// Properties carried by Text nodes
#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub characters: String,
    pub font_name: Mixed<FontName>,
    pub font_size: Mixed<f64>,
    pub line_height: LineHeight,
    /// Styled runs covering `characters` in order
    pub runs: Vec<TextRun>,
}

impl TextProps {
    /// Text set entirely in one font and size
    pub fn uniform(characters: impl Into<String>, font: FontName, size: f64) -> Self {
        let characters = characters.into();
        let len = characters.chars().count();
        Self {
            characters,
            font_name: Mixed::Uniform(font.clone()),
            font_size: Mixed::Uniform(size),
            line_height: LineHeight::Auto,
            runs: vec![TextRun::new(len, font, size)],
        }
    }

    /// Text built from styled runs; node-level font and size become
    /// [`Mixed::Mixed`] when the runs disagree.
    pub fn from_runs(characters: impl Into<String>, runs: Vec<TextRun>) -> Self {
        let font_name = match runs.split_first() {
            Some((first, rest)) if rest.iter().all(|r| r.font == first.font) => {
                Mixed::Uniform(first.font.clone())
            }
            _ => Mixed::Mixed,
        };
        let font_size = match runs.split_first() {
            Some((first, rest)) if rest.iter().all(|r| r.size == first.size) => {
                Mixed::Uniform(first.size)
            }
            _ => Mixed::Mixed,
        };
        Self {
            characters: characters.into(),
            font_name,
            font_size,
            line_height: LineHeight::Auto,
            runs,
        }
    }

    /// Set line height
    pub fn with_line_height(mut self, line_height: LineHeight) -> Self {
        self.line_height = line_height;
        self
    }

    /// Number of characters
    pub fn char_len(&self) -> usize {
        self.characters.chars().count()
    }

    fn run_at(&self, index: usize) -> Option<&TextRun> {
        let mut start = 0;
        for run in &self.runs {
            if index < start + run.len {
                return Some(run);
            }
            start += run.len;
        }
        None
    }

    /// Font of the character at `index`
    pub fn font_at(&self, index: usize) -> Option<&FontName> {
        self.run_at(index).map(|r| &r.font)
    }

    /// Font size of the character at `index`
    pub fn size_at(&self, index: usize) -> Option<f64> {
        self.run_at(index).map(|r| r.size)
    }
}
