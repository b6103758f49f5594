//! Vector stroke definitions and geometry.

mod generator;

pub use generator::{compute_path, normalized_rect, path_bounds};

use crate::color::Rgba;
use kurbo::BezPath;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// Style properties shared by new strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width.
    pub width: f64,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub opacity: f64,
}

impl StrokeStyle {
    /// Get the stroke color with opacity applied.
    pub fn color_with_opacity(&self) -> Rgba {
        self.color.multiply_alpha(self.opacity)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            width: 2.0,
            opacity: 1.0,
        }
    }
}

/// A committed vector stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    /// Geometry of the stroke.
    pub path: BezPath,
    /// Style captured when the gesture ended.
    pub style: StrokeStyle,
}

impl Stroke {
    /// Create a stroke with a fresh id.
    pub fn new(path: BezPath, style: StrokeStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            path,
            style,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn color(&self) -> Rgba {
        self.style.color
    }

    pub fn width(&self) -> f64 {
        self.style.width
    }

    pub fn opacity(&self) -> f64 {
        self.style.opacity
    }
}
