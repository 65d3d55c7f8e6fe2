//! Fill paints.

use serde::{Deserialize, Serialize};

/// Color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels
    pub const fn gray(v: f64) -> Self {
        Self::new(v, v, v)
    }
}

/// Light gray used for every placeholder
pub const SKELETON_GRAY: Rgb = Rgb::gray(0.85);

/// A node fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid { color: Rgb },
}

impl Paint {
    /// Solid fill of `color`
    pub const fn solid(color: Rgb) -> Self {
        Self::Solid { color }
    }

    /// Color of a solid paint
    pub fn color(&self) -> Rgb {
        match self {
            Self::Solid { color } => *color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_json_shape() {
        let json = serde_json::to_value(Paint::solid(SKELETON_GRAY)).unwrap();
        assert_eq!(json["type"], "SOLID");
        assert_eq!(json["color"]["g"], 0.85);
    }
}
