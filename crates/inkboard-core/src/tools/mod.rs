//! Tool and engine selection for the whiteboard.

use crate::color::Rgba;
use crate::ink::{InkTool, InkType};
use crate::shapes::StrokeStyle;
use serde::{Deserialize, Serialize};

/// Narrowest stroke the width slider allows.
pub const MIN_LINE_WIDTH: f64 = 1.0;
/// Widest stroke the width slider allows.
pub const MAX_LINE_WIDTH: f64 = 60.0;

/// Vector tools. Each one turns gesture samples into geometry differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Freehand,
    Rectangle,
    Ellipse,
    Line,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Freehand,
        ToolKind::Rectangle,
        ToolKind::Ellipse,
        ToolKind::Line,
    ];
}

/// Which drawing engine receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EngineMode {
    /// Vector strokes kept by the path store.
    #[default]
    VectorPath,
    /// Ink strokes handled by the ink surface.
    BitmapInk,
}

/// Identifies the highlighted tool button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolId {
    Vector(ToolKind),
    Ink(InkType),
    Eraser,
}

impl ToolId {
    /// Stable name for the tool, used in logs and scripts.
    pub fn name(self) -> &'static str {
        match self {
            ToolId::Vector(ToolKind::Freehand) => "freehand",
            ToolId::Vector(ToolKind::Rectangle) => "rectangle",
            ToolId::Vector(ToolKind::Ellipse) => "ellipse",
            ToolId::Vector(ToolKind::Line) => "line",
            ToolId::Ink(ink) => ink.name(),
            ToolId::Eraser => "eraser",
        }
    }
}

/// Single source of truth for the active engine, tools and style.
#[derive(Debug, Clone)]
pub struct ToolController {
    engine: EngineMode,
    tool_kind: ToolKind,
    ink_tool: InkTool,
    selected: ToolId,
    /// Style applied to new strokes on both engines.
    pub style: StrokeStyle,
    /// Derive width and opacity from gesture speed.
    pub pressure_emulation: bool,
}

impl Default for ToolController {
    fn default() -> Self {
        Self {
            engine: EngineMode::default(),
            tool_kind: ToolKind::default(),
            ink_tool: InkTool::default(),
            selected: ToolId::Vector(ToolKind::default()),
            style: StrokeStyle::default(),
            pressure_emulation: false,
        }
    }
}

impl ToolController {
    /// Create a controller with default tools.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> EngineMode {
        self.engine
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool_kind
    }

    pub fn ink_tool(&self) -> InkTool {
        self.ink_tool
    }

    pub fn selected(&self) -> ToolId {
        self.selected
    }

    /// Activate the vector engine with the given tool.
    pub fn select_vector_tool(&mut self, kind: ToolKind) {
        self.engine = EngineMode::VectorPath;
        self.tool_kind = kind;
        self.selected = ToolId::Vector(kind);
        log::debug!("Selected vector tool {}", self.selected.name());
    }

    /// Activate the ink engine with the given ink.
    pub fn select_ink_tool(&mut self, ink: InkType) {
        self.engine = EngineMode::BitmapInk;
        self.ink_tool = InkTool::Ink(ink);
        self.selected = ToolId::Ink(ink);
        log::debug!("Selected ink tool {}", self.selected.name());
    }

    /// Activate the ink engine with the eraser.
    pub fn select_eraser(&mut self) {
        self.engine = EngineMode::BitmapInk;
        self.ink_tool = InkTool::Eraser;
        self.selected = ToolId::Eraser;
        log::debug!("Selected eraser");
    }

    /// Switch engines, keeping each engine's last tool.
    pub fn set_engine(&mut self, engine: EngineMode) {
        self.engine = engine;
        self.selected = match engine {
            EngineMode::VectorPath => ToolId::Vector(self.tool_kind),
            EngineMode::BitmapInk => match self.ink_tool {
                InkTool::Ink(ink) => ToolId::Ink(ink),
                InkTool::Eraser => ToolId::Eraser,
            },
        };
        log::debug!("Switched to {:?} ({})", engine, self.selected.name());
    }

    pub fn toggle_pressure_emulation(&mut self) {
        self.pressure_emulation = !self.pressure_emulation;
        log::debug!("Pressure emulation {}", self.pressure_emulation);
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.style.color = color;
    }

    /// Set the stroke width, clamped to the slider range. Non-finite values are ignored.
    pub fn set_width(&mut self, width: f64) {
        if width.is_finite() {
            self.style.width = width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        }
    }

    /// Set the stroke opacity, clamped to 0..=1. Non-finite values are ignored.
    pub fn set_opacity(&mut self, opacity: f64) {
        if opacity.is_finite() {
            self.style.opacity = opacity.clamp(0.0, 1.0);
        }
    }
}
