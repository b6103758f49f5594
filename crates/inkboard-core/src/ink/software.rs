//! In-process ink surface with snapshot history.

use super::{InkDrawing, InkStroke, InkSurface, InkTool};
use crate::color::Rgba;
use kurbo::Point;

/// Maximum number of undo states to keep.
pub const MAX_UNDO_HISTORY: usize = 50;

/// Live tool configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Brush {
    tool: InkTool,
    color: Rgba,
    width: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            tool: InkTool::default(),
            color: Rgba::BLACK,
            width: 2.0,
        }
    }
}

/// Ink surface that records strokes as point lists.
#[derive(Debug, Clone)]
pub struct SoftwareInkSurface {
    drawing: InkDrawing,
    background: Rgba,
    brush: Brush,
    ruler_active: bool,
    /// Stroke being drawn, not yet part of the drawing.
    pending: Option<InkStroke>,
    /// Undo history stack.
    undo_stack: Vec<InkDrawing>,
    /// Redo history stack.
    redo_stack: Vec<InkDrawing>,
}

impl Default for SoftwareInkSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftwareInkSurface {
    /// Create an empty surface on a white background.
    pub fn new() -> Self {
        Self {
            drawing: InkDrawing::default(),
            background: Rgba::WHITE,
            brush: Brush::default(),
            ruler_active: false,
            pending: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Tool, color and width the next stroke will use.
    pub fn tool(&self) -> (InkTool, Rgba, f64) {
        (self.brush.tool, self.brush.color, self.brush.width)
    }

    /// Push current state to undo stack (call before making changes).
    fn push_undo(&mut self) {
        self.undo_stack.push(self.drawing.clone());

        // Clear redo stack when new changes are made
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }
}

impl InkSurface for SoftwareInkSurface {
    fn set_tool(&mut self, tool: InkTool, color: Rgba, width: f64, opacity: f64) {
        self.brush = Brush {
            tool,
            color: color.with_opacity(opacity),
            width,
        };
    }

    fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    fn background(&self) -> Rgba {
        self.background
    }

    fn undo(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            let current = std::mem::replace(&mut self.drawing, snapshot);
            self.redo_stack.push(current);
            log::debug!("Ink undo ({} strokes)", self.drawing.len());
        }
    }

    fn redo(&mut self) {
        if let Some(snapshot) = self.redo_stack.pop() {
            let current = std::mem::replace(&mut self.drawing, snapshot);
            self.undo_stack.push(current);
            log::debug!("Ink redo ({} strokes)", self.drawing.len());
        }
    }

    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn clear(&mut self) {
        self.drawing = InkDrawing::default();
        self.pending = None;
        self.undo_stack.clear();
        self.redo_stack.clear();
        log::debug!("Ink surface cleared");
    }

    fn content(&self) -> &InkDrawing {
        &self.drawing
    }

    fn pending(&self) -> Option<&InkStroke> {
        self.pending.as_ref()
    }

    fn set_ruler_active(&mut self, active: bool) {
        self.ruler_active = active;
    }

    fn is_ruler_active(&self) -> bool {
        self.ruler_active
    }

    fn pointer_down(&mut self, point: Point) {
        if self.pending.is_some() {
            return;
        }
        self.pending = Some(InkStroke {
            tool: self.brush.tool,
            color: self.brush.color,
            width: self.brush.width,
            points: vec![point],
        });
    }

    fn pointer_move(&mut self, point: Point) {
        let ruler = self.ruler_active;
        let Some(stroke) = self.pending.as_mut() else {
            return;
        };
        if ruler {
            // Along the ruler the stroke is a single straight segment.
            stroke.points.truncate(1);
        }
        stroke.points.push(point);
    }

    fn pointer_up(&mut self) {
        let Some(stroke) = self.pending.take() else {
            return;
        };
        self.push_undo();
        self.drawing.strokes.push(stroke);
        log::debug!("Ink stroke committed ({} strokes)", self.drawing.len());
    }

    fn pointer_cancel(&mut self) {
        self.pending = None;
    }
}
