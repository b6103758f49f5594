//! Renderer trait abstraction.

use inkboard_core::{Frame, InkStroke, InkTool, Rgba};
use kurbo::{BezPath, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport {width}x{height} at scale {scale_factor}")]
    InvalidViewport {
        width: f64,
        height: f64,
        scale_factor: f64,
    },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Whiteboard snapshot to draw.
    pub frame: Frame<'a>,
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(frame: Frame<'a>, viewport_size: Size) -> Self {
        Self {
            frame,
            viewport_size,
            scale_factor: 1.0,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Check that there is something to draw into.
    pub fn validate(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        let drawable = width.is_finite()
            && height.is_finite()
            && width > 0.0
            && height > 0.0
            && self.scale_factor.is_finite()
            && self.scale_factor > 0.0;
        if drawable {
            Ok(())
        } else {
            Err(RendererError::InvalidViewport {
                width,
                height,
                scale_factor: self.scale_factor,
            })
        }
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, wgpu directly, or other rendering engines.
/// The ink layer is drawn first, then the vector strokes on top of it.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.frame.background.into()
    }
}

/// Polyline through the stroke's samples.
///
/// A single sample becomes a zero-length segment so round caps draw a dot.
pub fn ink_stroke_path(stroke: &InkStroke) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = stroke.points.split_first() else {
        return path;
    };
    path.move_to(*first);
    if rest.is_empty() {
        path.line_to(*first);
    }
    for point in rest {
        path.line_to(*point);
    }
    path
}

/// Color an ink stroke is painted with. Eraser strokes paint the background.
pub fn ink_stroke_color(stroke: &InkStroke, background: Rgba) -> Rgba {
    match stroke.tool {
        InkTool::Ink(ink) => stroke.color.multiply_alpha(ink.base_alpha()),
        InkTool::Eraser => background,
    }
}

/// Rendered width of an ink stroke.
pub fn ink_stroke_width(stroke: &InkStroke) -> f64 {
    match stroke.tool {
        InkTool::Ink(ink) => stroke.width * ink.width_scale(),
        InkTool::Eraser => stroke.width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkboard_core::{InkType, Whiteboard, SoftwareInkSurface};
    use kurbo::{PathEl, Point};

    fn stroke(tool: InkTool, points: Vec<Point>) -> InkStroke {
        InkStroke {
            tool,
            color: Rgba::new(0, 0, 255, 200),
            width: 10.0,
            points,
        }
    }

    #[test]
    fn test_single_sample_draws_dot() {
        let s = stroke(InkTool::Ink(InkType::Pen), vec![Point::new(2.0, 3.0)]);
        let path = ink_stroke_path(&s);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(2.0, 3.0)),
                PathEl::LineTo(Point::new(2.0, 3.0))
            ]
        );
        assert!(ink_stroke_path(&stroke(InkTool::Eraser, Vec::new())).elements().is_empty());
    }

    #[test]
    fn test_eraser_paints_background() {
        let s = stroke(InkTool::Eraser, vec![Point::ZERO, Point::new(1.0, 1.0)]);
        assert_eq!(ink_stroke_color(&s, Rgba::rgb(9, 9, 9)), Rgba::rgb(9, 9, 9));
        assert_eq!(ink_stroke_width(&s), 10.0);
    }

    #[test]
    fn test_ink_type_modulates_stroke() {
        let s = stroke(InkTool::Ink(InkType::Watercolor), vec![Point::ZERO]);
        assert_eq!(ink_stroke_width(&s), 20.0);
        assert_eq!(ink_stroke_color(&s, Rgba::WHITE).a, 100);
    }

    #[test]
    fn test_viewport_validation() {
        let board: Whiteboard<SoftwareInkSurface> = Whiteboard::default();
        let ctx = RenderContext::new(board.frame(), Size::new(800.0, 600.0));
        assert!(ctx.validate().is_ok());

        let ctx = RenderContext::new(board.frame(), Size::new(0.0, 600.0));
        assert!(matches!(ctx.validate(), Err(RendererError::InvalidViewport { .. })));

        let ctx = RenderContext::new(board.frame(), Size::new(800.0, 600.0)).with_scale_factor(0.0);
        assert!(ctx.validate().is_err());
    }
}
