//! Stylus ink surface: the bitmap drawing layer under the vector strokes.
//!
//! The engine only drives a surface through [`InkSurface`]. Its history and
//! stroke representation belong to the surface; [`SoftwareInkSurface`] is the
//! in-process implementation.

mod software;

pub use software::{SoftwareInkSurface, MAX_UNDO_HISTORY};

use crate::color::Rgba;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Physical media emulated by ink tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InkType {
    Marker,
    #[default]
    Pencil,
    Pen,
    Monoline,
    FountainPen,
    Watercolor,
    Crayon,
}

impl InkType {
    pub const ALL: [InkType; 7] = [
        InkType::Marker,
        InkType::Pencil,
        InkType::Pen,
        InkType::Monoline,
        InkType::FountainPen,
        InkType::Watercolor,
        InkType::Crayon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InkType::Marker => "marker",
            InkType::Pencil => "pencil",
            InkType::Pen => "pen",
            InkType::Monoline => "monoline",
            InkType::FountainPen => "fountainPen",
            InkType::Watercolor => "watercolor",
            InkType::Crayon => "crayon",
        }
    }

    /// Width multiplier applied when the medium is rendered.
    pub fn width_scale(self) -> f64 {
        match self {
            InkType::Marker => 1.5,
            InkType::Pencil => 0.8,
            InkType::Pen | InkType::Monoline => 1.0,
            InkType::FountainPen => 1.2,
            InkType::Watercolor => 2.0,
            InkType::Crayon => 1.4,
        }
    }

    /// Alpha multiplier applied when the medium is rendered.
    pub fn base_alpha(self) -> f64 {
        match self {
            InkType::Marker => 0.8,
            InkType::Pencil => 0.9,
            InkType::Pen | InkType::Monoline | InkType::FountainPen => 1.0,
            InkType::Watercolor => 0.5,
            InkType::Crayon => 0.85,
        }
    }
}

/// Live tool of an ink surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InkTool {
    Ink(InkType),
    /// Erases pixels under the stroke.
    Eraser,
}

impl Default for InkTool {
    fn default() -> Self {
        InkTool::Ink(InkType::default())
    }
}

/// One recorded ink stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InkStroke {
    pub tool: InkTool,
    /// Tool color with the opacity already in its alpha channel.
    pub color: Rgba,
    pub width: f64,
    pub points: Vec<Point>,
}

impl InkStroke {
    pub fn is_eraser(&self) -> bool {
        self.tool == InkTool::Eraser
    }
}

/// Content of an ink surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InkDrawing {
    pub strokes: Vec<InkStroke>,
}

impl InkDrawing {
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }
}

/// Command surface of a stylus-capable canvas.
///
/// Undo, redo and clear act on the surface's own history and never touch the
/// vector strokes.
pub trait InkSurface {
    /// Reconfigure the live tool. `opacity` is baked into the tool color.
    fn set_tool(&mut self, tool: InkTool, color: Rgba, width: f64, opacity: f64);

    fn set_background(&mut self, color: Rgba);

    fn background(&self) -> Rgba;

    /// Undo the last content change. No-op without history.
    fn undo(&mut self);

    /// Redo the last undone change. No-op without history.
    fn redo(&mut self);

    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    /// Replace the content with an empty drawing and drop the history.
    fn clear(&mut self);

    /// Current drawing.
    fn content(&self) -> &InkDrawing;

    /// Stroke under the pointer, not yet part of the drawing.
    fn pending(&self) -> Option<&InkStroke>;

    /// Toggle the straight-edge ruler.
    fn set_ruler_active(&mut self, active: bool);

    fn is_ruler_active(&self) -> bool;

    fn pointer_down(&mut self, point: Point);

    fn pointer_move(&mut self, point: Point);

    fn pointer_up(&mut self);

    /// Abandon the stroke in progress without recording it.
    fn pointer_cancel(&mut self);
}
