//! Text metrics estimation
//!
//! Resolves the font size and pixel line height a text node's bars are laid
//! out with. Fonts must be loadable before a node is measured:
//!
//! - **Uniform font**: the node's font, then [`fallback_fonts`] in order.
//!   If none loads the node fails with `FontUnavailable`.
//! - **Mixed fonts**: every distinct font found by scanning the characters is
//!   loaded best-effort; individual failures are only logged.
//!
//! Mixed font sizes resolve to the largest size in the text, so a skeleton is
//! never smaller than its largest run.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::config::{LINE_HEIGHT_FACTOR, fallback_fonts};
use crate::error::{SkeletonError, SkeletonResult};
use crate::host::FontLoader;
use crate::node::{FontName, LineHeight, Mixed, TextProps};

use super::RunContext;

/// Resolved measurements of a text node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub font_size: f64,
    pub line_height_px: f64,
}

/// Estimate metrics for a text node.
///
/// On `FontUnavailable` the run context gets one warning per font family.
pub async fn estimate<F: FontLoader>(
    text: &TextProps,
    fonts: &F,
    ctx: &mut RunContext,
) -> SkeletonResult<TextMetrics> {
    match &text.font_name {
        Mixed::Uniform(font) => {
            if let Err(err) = load_with_fallback(font, fonts).await {
                ctx.report_missing_font(&font.family);
                return Err(err);
            }
        }
        Mixed::Mixed => {
            for font in distinct_fonts(text) {
                if let Err(err) = load_with_fallback(&font, fonts).await {
                    warn!(
                        font = %font,
                        error = %err,
                        "font in mixed text unavailable, measuring anyway"
                    );
                }
            }
        }
    }

    let font_size = match text.font_size {
        Mixed::Uniform(size) => size,
        Mixed::Mixed => max_font_size(text),
    };
    if !(font_size.is_finite() && font_size > 0.0) {
        return Err(SkeletonError::structural(format!("invalid font size {font_size}")));
    }

    Ok(TextMetrics {
        font_size,
        line_height_px: resolve_line_height(text.line_height, font_size),
    })
}

/// Pixel line height for `line_height` at `font_size`.
///
/// Auto and mixed use [`LINE_HEIGHT_FACTOR`]; so does any value that would
/// not give a positive height.
pub fn resolve_line_height(line_height: LineHeight, font_size: f64) -> f64 {
    let auto = font_size * LINE_HEIGHT_FACTOR;
    let px = match line_height {
        LineHeight::Auto | LineHeight::Mixed => auto,
        LineHeight::Pixels(px) => px,
        LineHeight::Percent(pct) => font_size * (pct / 100.0),
    };
    if px.is_finite() && px > 0.0 {
        px
    } else {
        debug!(?line_height, "degenerate line height, using auto");
        auto
    }
}

async fn load_with_fallback<F: FontLoader>(font: &FontName, fonts: &F) -> SkeletonResult<()> {
    match fonts.load_font(font).await {
        Ok(()) => return Ok(()),
        Err(err) => warn!(font = %font, error = %err, "font unavailable, trying fallbacks"),
    }
    for fallback in fallback_fonts() {
        if fonts.load_font(&fallback).await.is_ok() {
            debug!(font = %font, fallback = %fallback, "using fallback font");
            return Ok(());
        }
    }
    Err(SkeletonError::FontUnavailable {
        family: font.family.to_string(),
    })
}

/// Fonts used in `text`, in order of first appearance
fn distinct_fonts(text: &TextProps) -> Vec<FontName> {
    let mut seen = FxHashSet::default();
    (0..text.char_len())
        .filter_map(|i| text.font_at(i))
        .filter(|font| seen.insert(*font))
        .cloned()
        .collect()
}

fn max_font_size(text: &TextProps) -> f64 {
    let by_char = (0..text.char_len())
        .filter_map(|i| text.size_at(i))
        .fold(f64::NAN, f64::max);
    if by_char.is_nan() {
        text.runs.iter().map(|r| r.size).fold(f64::NAN, f64::max)
    } else {
        by_char
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CornerRadius, SkeletonStyle};
    use crate::host::FontBook;
    use crate::node::TextRun;

    fn ctx() -> RunContext {
        RunContext::new(CornerRadius::default(), SkeletonStyle::default())
    }

    fn inter() -> FontName {
        FontName::regular("Inter")
    }

    #[tokio::test]
    async fn test_uniform_font_auto_line_height() {
        let fonts = FontBook::with_fonts([inter()]);
        let text = TextProps::uniform("Hello", inter(), 20.0);

        let m = estimate(&text, &fonts, &mut ctx()).await.unwrap();
        assert_eq!(m.font_size, 20.0);
        assert_eq!(m.line_height_px, 24.0);
        assert_eq!(fonts.attempts(), vec![inter()]);
    }

    #[tokio::test]
    async fn test_pixel_and_percent_line_height() {
        let fonts = FontBook::with_fonts([inter()]);
        let px = TextProps::uniform("a", inter(), 16.0).with_line_height(LineHeight::Pixels(30.0));
        let pct =
            TextProps::uniform("a", inter(), 16.0).with_line_height(LineHeight::Percent(150.0));
        let mixed = TextProps::uniform("a", inter(), 10.0).with_line_height(LineHeight::Mixed);

        assert_eq!(estimate(&px, &fonts, &mut ctx()).await.unwrap().line_height_px, 30.0);
        assert_eq!(estimate(&pct, &fonts, &mut ctx()).await.unwrap().line_height_px, 24.0);
        assert_eq!(estimate(&mixed, &fonts, &mut ctx()).await.unwrap().line_height_px, 12.0);
    }

    #[test]
    fn test_degenerate_line_height_falls_back_to_auto() {
        assert_eq!(resolve_line_height(LineHeight::Pixels(0.0), 10.0), 12.0);
        assert_eq!(resolve_line_height(LineHeight::Percent(-50.0), 10.0), 12.0);
    }

    #[tokio::test]
    async fn test_fallback_font_used() {
        let fonts = FontBook::with_fonts([FontName::regular("Arial")]);
        let brand = FontName::new("Brand Sans", "Medium");
        let text = TextProps::uniform("a", brand.clone(), 12.0);

        let mut ctx = ctx();
        assert!(estimate(&text, &fonts, &mut ctx).await.is_ok());
        assert!(ctx.notices.is_empty());
        assert_eq!(
            fonts.attempts(),
            vec![
                brand,
                FontName::regular("Inter"),
                FontName::regular("Roboto"),
                FontName::regular("Arial"),
            ]
        );
    }

    #[tokio::test]
    async fn test_font_unavailable_after_fallbacks() {
        let fonts = FontBook::new();
        let text = TextProps::uniform("a", FontName::regular("Brand Sans"), 12.0);

        let mut ctx = ctx();
        let err = estimate(&text, &fonts, &mut ctx).await.unwrap_err();
        assert!(
            matches!(err, SkeletonError::FontUnavailable { ref family } if family == "Brand Sans")
        );
        assert_eq!(ctx.notices.len(), 1);
        assert_eq!(fonts.attempts().len(), 1 + fallback_fonts().len());
    }

    #[tokio::test]
    async fn test_mixed_fonts_use_largest_size() {
        let bold = FontName::new("Inter", "Bold");
        let fonts = FontBook::with_fonts([inter(), bold.clone()]);
        let text = TextProps::from_runs(
            "Big small big",
            vec![
                TextRun::new(4, bold.clone(), 32.0),
                TextRun::new(6, inter(), 14.0),
                TextRun::new(3, bold.clone(), 32.0),
            ],
        );

        let m = estimate(&text, &fonts, &mut ctx()).await.unwrap();
        assert_eq!(m.font_size, 32.0);
        assert!((m.line_height_px - 38.4).abs() < 1e-9);
        // each distinct font requested once
        assert_eq!(fonts.attempts(), vec![bold, inter()]);
    }

    #[tokio::test]
    async fn test_mixed_fonts_tolerate_failures() {
        let fonts = FontBook::new();
        let text = TextProps::from_runs(
            "ab",
            vec![
                TextRun::new(1, FontName::regular("Gone"), 10.0),
                TextRun::new(1, FontName::regular("Also Gone"), 18.0),
            ],
        );

        let mut ctx = ctx();
        let m = estimate(&text, &fonts, &mut ctx).await.unwrap();
        assert_eq!(m.font_size, 18.0);
        assert!(ctx.notices.is_empty());
    }
}
