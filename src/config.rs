//! Tunables and user-facing configuration.

use std::fmt;

use serde_json::Value;

use crate::error::{SkeletonError, SkeletonResult};
use crate::node::{FontName, Rgb, SKELETON_GRAY};

/// Corner radius used when none (or an invalid one) is supplied
pub const DEFAULT_CORNER_RADIUS: f64 = 24.0;

/// Nodes narrower or shorter than this are never converted
pub const MIN_NODE_SIZE: f64 = 4.0;

/// Auto line height as a multiple of font size
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Bar height as a multiple of font size
pub const BAR_HEIGHT_FACTOR: f64 = 0.7;

pub const MIN_BAR_HEIGHT: f64 = 6.0;

/// Width of the last text bar relative to the text box
pub const LAST_LINE_WIDTH_FACTOR: f64 = 0.6;

/// Most bars generated for a single text node
pub const MAX_TEXT_LINES: usize = 10_000;

/// Horizontal gap between a top-level frame and its skeleton copy
pub const DUPLICATE_GAP: f64 = 50.0;

/// Fonts tried, in order, when a text node's own font cannot be loaded
pub fn fallback_fonts() -> [FontName; 4] {
    [
        FontName::regular("Inter"),
        FontName::regular("Roboto"),
        FontName::regular("Arial"),
        FontName::regular("Helvetica"),
    ]
}

// =============================================================================
// CornerRadius
// =============================================================================

/// A finite, non-negative corner radius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CornerRadius(f64);

impl CornerRadius {
    /// Validate a radius
    pub fn new(value: f64) -> SkeletonResult<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(SkeletonError::configuration(format!(
                "corner radius must be a non-negative number, got {value}"
            )))
        }
    }

    /// Validate a radius received as JSON.
    ///
    /// Numbers and numeric strings are accepted. Callers substitute
    /// [`CornerRadius::default`] on error.
    pub fn coerce(value: &Value) -> SkeletonResult<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| {
                    SkeletonError::configuration(format!("corner radius {n} out of range"))
                })
                .and_then(Self::new),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| {
                    SkeletonError::configuration(format!("corner radius \"{s}\" is not a number"))
                })
                .and_then(Self::new),
            Value::Null => Err(SkeletonError::configuration("corner radius is missing")),
            other => Err(SkeletonError::configuration(format!(
                "corner radius {other} is not a number"
            ))),
        }
    }

    /// Radius in pixels
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self(DEFAULT_CORNER_RADIUS)
    }
}

impl fmt::Display for CornerRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

// =============================================================================
// SkeletonStyle
// =============================================================================

/// Look and naming of generated placeholders
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonStyle {
    pub fill: Rgb,
    /// Appended to a shape's name
    pub shape_suffix: &'static str,
    /// Appended to a text node's name, followed by the 1-based line number
    pub line_suffix: &'static str,
    /// Appended to a duplicated top-level frame's name
    pub copy_suffix: &'static str,
}

impl Default for SkeletonStyle {
    fn default() -> Self {
        Self {
            fill: SKELETON_GRAY,
            shape_suffix: " (skeleton)",
            line_suffix: " (skeleton line ",
            copy_suffix: " (Skeleton)",
        }
    }
}

impl SkeletonStyle {
    /// Name of a shape placeholder
    pub fn shape_name(&self, original: &str) -> String {
        format!("{original}{}", self.shape_suffix)
    }

    /// Name of the `line`th (1-based) text bar
    pub fn line_name(&self, original: &str, line: usize) -> String {
        format!("{original}{}{line})", self.line_suffix)
    }

    /// Name of a skeleton copy
    pub fn copy_name(&self, original: &str) -> String {
        format!("{original}{}", self.copy_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_accepts_numbers() {
        assert_eq!(CornerRadius::coerce(&json!(12)).unwrap().get(), 12.0);
        assert_eq!(CornerRadius::coerce(&json!(0)).unwrap().get(), 0.0);
        assert_eq!(CornerRadius::coerce(&json!("8.5")).unwrap().get(), 8.5);
    }

    #[test]
    fn test_coerce_rejects_invalid() {
        for bad in [json!(-5), json!("abc"), json!(null), json!(true), json!([1])] {
            let err = CornerRadius::coerce(&bad).unwrap_err();
            assert!(matches!(err, SkeletonError::Configuration(_)), "{bad}");
        }
        assert!(CornerRadius::new(f64::NAN).is_err());
        assert!(CornerRadius::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_radius() {
        assert_eq!(CornerRadius::default().get(), 24.0);
        assert_eq!(CornerRadius::default().to_string(), "24px");
    }

    #[test]
    fn test_names() {
        let style = SkeletonStyle::default();
        assert_eq!(style.shape_name("Avatar"), "Avatar (skeleton)");
        assert_eq!(style.line_name("Body", 2), "Body (skeleton line 2)");
        assert_eq!(style.copy_name("Card"), "Card (Skeleton)");
    }
}
