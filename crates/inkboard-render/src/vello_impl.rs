//! Vello-based renderer implementation.

use crate::renderer::{
    RenderContext, RenderResult, Renderer, ink_stroke_color, ink_stroke_path, ink_stroke_width,
};
use inkboard_core::{Frame, InkStroke, Rgba, StrokeStyle};
use kurbo::{Affine, BezPath, Cap, Join, Rect, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Round caps and joins, like a pen tip.
fn pen_stroke(width: f64) -> Stroke {
    Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round)
}

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new renderer with an empty scene.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// The scene built by the last call to `build_scene`.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Background and ink layer.
    fn render_ink_layer(&mut self, frame: &Frame, transform: Affine, viewport: Rect) {
        let background: Color = frame.background.into();
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, background, None, &viewport);

        for stroke in frame.ink.strokes.iter().chain(frame.ink_preview) {
            self.render_ink_stroke(stroke, frame.background, transform);
        }
    }

    /// Render one ink stroke. Eraser strokes paint the background back.
    fn render_ink_stroke(&mut self, stroke: &InkStroke, background: Rgba, transform: Affine) {
        let path = ink_stroke_path(stroke);
        if path.elements().is_empty() {
            return;
        }
        let color: Color = ink_stroke_color(stroke, background).into();
        self.scene.stroke(
            &pen_stroke(ink_stroke_width(stroke)),
            transform,
            color,
            None,
            &path,
        );
    }

    /// Render one vector stroke.
    fn render_vector_stroke(&mut self, path: &BezPath, style: &StrokeStyle, transform: Affine) {
        let color: Rgba = style.color_with_opacity();
        let color: Color = color.into();
        self.scene
            .stroke(&pen_stroke(style.width), transform, color, None, path);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;

        // Clear the scene
        self.scene.reset();

        let transform = Affine::scale(ctx.scale_factor);
        let viewport = Rect::new(
            0.0,
            0.0,
            ctx.viewport_size.width * ctx.scale_factor,
            ctx.viewport_size.height * ctx.scale_factor,
        );

        let frame = &ctx.frame;
        self.render_ink_layer(frame, transform, viewport);

        for stroke in frame.strokes {
            self.render_vector_stroke(&stroke.path, &stroke.style, transform);
        }

        if let Some(preview) = &frame.preview {
            self.render_vector_stroke(preview.path, &preview.style, transform);
        }

        log::trace!(
            "Built scene for revision {} ({} ink, {} vector strokes)",
            frame.revision,
            frame.ink.len(),
            frame.strokes.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RendererError;
    use inkboard_core::{
        Command, GestureEvent, InkType, SoftwareInkSurface, ToolKind, Whiteboard,
    };
    use kurbo::{Point, Size};

    fn drag(board: &mut Whiteboard<SoftwareInkSurface>, from: Point, to: Point) {
        board.handle_gesture(GestureEvent::Begin(from));
        board.handle_gesture(GestureEvent::Update(to));
        board.handle_gesture(GestureEvent::End);
    }

    /// Ink and vector strokes, plus a rectangle still being dragged.
    fn busy_board() -> Whiteboard<SoftwareInkSurface> {
        let mut board = Whiteboard::default();
        drag(&mut board, Point::new(10.0, 10.0), Point::new(90.0, 40.0));
        board.apply(Command::SelectInkTool(InkType::Watercolor));
        drag(&mut board, Point::new(20.0, 20.0), Point::new(20.0, 80.0));
        board.apply(Command::SelectVectorTool(ToolKind::Rectangle));
        board.handle_gesture(GestureEvent::Begin(Point::new(5.0, 5.0)));
        board.handle_gesture(GestureEvent::Update(Point::new(60.0, 70.0)));
        board
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_empty_scene() {
        let mut renderer = VelloRenderer::new();
        let board: Whiteboard<SoftwareInkSurface> = Whiteboard::default();
        let ctx = RenderContext::new(board.frame(), Size::new(800.0, 600.0));

        renderer.build_scene(&ctx).unwrap();
        // Background only
        assert_eq!(renderer.scene().encoding().n_paths, 1);
    }

    #[test]
    fn test_build_scene_with_strokes() {
        let mut renderer = VelloRenderer::new();
        let board = busy_board();
        let frame = board.frame();
        assert!(frame.preview.is_some());

        renderer
            .build_scene(&RenderContext::new(frame, Size::new(800.0, 600.0)))
            .unwrap();
        // Background, ink stroke, vector stroke, preview
        assert_eq!(renderer.scene().encoding().n_paths, 4);
    }

    #[test]
    fn test_ink_in_progress_is_drawn() {
        let mut renderer = VelloRenderer::new();
        let mut board: Whiteboard<SoftwareInkSurface> = Whiteboard::default();
        board.apply(Command::SelectInkTool(InkType::Pen));
        board.handle_gesture(GestureEvent::Begin(Point::ZERO));
        board.handle_gesture(GestureEvent::Update(Point::new(50.0, 0.0)));

        renderer
            .build_scene(&RenderContext::new(board.frame(), Size::new(800.0, 600.0)))
            .unwrap();
        assert_eq!(renderer.scene().encoding().n_paths, 2);
    }

    #[test]
    fn test_rebuild_follows_viewport_changes() {
        let mut renderer = VelloRenderer::new();
        let board = busy_board();

        let ctx = RenderContext::new(board.frame(), Size::new(100.0, 100.0));
        renderer.build_scene(&ctx).unwrap();
        let paths = renderer.scene().encoding().n_paths;
        assert!(
            renderer
                .scene()
                .encoding()
                .transforms
                .iter()
                .all(|t| t.matrix[0] == 1.0)
        );

        // Same board revision, new scale factor: the scene is rebuilt, not reused
        let ctx = ctx.with_scale_factor(2.0);
        renderer.build_scene(&ctx).unwrap();
        let encoding = renderer.scene().encoding();
        assert_eq!(encoding.n_paths, paths);
        assert!(encoding.transforms.iter().any(|t| t.matrix[0] == 2.0));
    }

    #[test]
    fn test_invalid_viewport_rejected() {
        let mut renderer = VelloRenderer::new();
        let board: Whiteboard<SoftwareInkSurface> = Whiteboard::default();
        let ctx = RenderContext::new(board.frame(), Size::new(0.0, 0.0));
        assert!(matches!(
            renderer.build_scene(&ctx),
            Err(RendererError::InvalidViewport { .. })
        ));
    }
}
