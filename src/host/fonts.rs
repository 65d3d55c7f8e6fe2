//! In-memory font loader.

use std::future::Future;

use futures_util::future::ready;
use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use super::{FontLoader, HostError, HostResult};
use crate::node::FontName;

/// A fixed set of installed fonts.
///
/// Every load attempt is recorded in order, so callers can inspect which
/// fonts were tried.
#[derive(Debug, Default)]
pub struct FontBook {
    available: FxHashSet<FontName>,
    attempts: Mutex<Vec<FontName>>,
}

impl FontBook {
    /// Empty font book; every load fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Font book with the given fonts installed.
    pub fn with_fonts(fonts: impl IntoIterator<Item = FontName>) -> Self {
        Self {
            available: fonts.into_iter().collect(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Install a font
    pub fn install(&mut self, font: FontName) {
        self.available.insert(font);
    }

    /// Check whether a font is installed
    pub fn contains(&self, font: &FontName) -> bool {
        self.available.contains(font)
    }

    /// Fonts requested so far, in request order
    pub fn attempts(&self) -> Vec<FontName> {
        self.attempts.lock().clone()
    }
}

impl FontLoader for FontBook {
    fn load_font(&self, font: &FontName) -> impl Future<Output = HostResult<()>> {
        self.attempts.lock().push(font.clone());
        if self.available.contains(font) {
            ready(Ok(()))
        } else {
            ready(Err(HostError::FontLoad(font.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_font_book_loads_installed_fonts() {
        let book = FontBook::with_fonts([FontName::regular("Inter")]);

        assert!(book.load_font(&FontName::regular("Inter")).await.is_ok());
        let err = book.load_font(&FontName::regular("Papyrus")).await.unwrap_err();
        assert_eq!(err, HostError::FontLoad(FontName::regular("Papyrus")));

        assert_eq!(
            book.attempts(),
            vec![FontName::regular("Inter"), FontName::regular("Papyrus")]
        );
    }
}
