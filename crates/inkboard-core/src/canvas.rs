//! The whiteboard: both drawing engines behind one input and history interface.

use crate::color::Rgba;
use crate::config::BoardConfig;
use crate::ink::{InkDrawing, InkStroke, InkSurface, SoftwareInkSurface};
use crate::input::{Command, GestureEvent, SessionEvent};
use crate::paths::PathStore;
use crate::shapes::{Stroke, StrokeStyle};
use crate::tools::{EngineMode, ToolController, ToolId};
use kurbo::BezPath;

/// Stroke being drawn on the vector layer, styled as it will be committed.
#[derive(Debug, Clone, Copy)]
pub struct StrokePreview<'a> {
    pub path: &'a BezPath,
    pub style: StrokeStyle,
}

/// Everything a renderer needs to draw one frame, back to front.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Changes whenever anything visible changes.
    pub revision: u64,
    pub background: Rgba,
    /// Ink layer, drawn over the background.
    pub ink: &'a InkDrawing,
    /// Ink stroke in progress, drawn over the committed ink.
    pub ink_preview: Option<&'a InkStroke>,
    /// Committed vector strokes, drawn over the ink.
    pub strokes: &'a [Stroke],
    /// Vector stroke in progress, drawn last.
    pub preview: Option<StrokePreview<'a>>,
    pub engine: EngineMode,
    pub selected: ToolId,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Runtime whiteboard state (not persisted).
#[derive(Debug, Clone)]
pub struct Whiteboard<S: InkSurface> {
    /// Tool and style selection.
    tools: ToolController,
    /// Vector layer.
    paths: PathStore,
    /// Ink layer.
    surface: S,
    revision: u64,
}

impl Default for Whiteboard<SoftwareInkSurface> {
    fn default() -> Self {
        Self::new(SoftwareInkSurface::new())
    }
}

impl<S: InkSurface> Whiteboard<S> {
    /// Create a whiteboard with default tools around `surface`.
    pub fn new(surface: S) -> Self {
        Self::with_config(&BoardConfig::default(), surface)
    }

    /// Create a whiteboard whose tools start as described by `config`.
    pub fn with_config(config: &BoardConfig, surface: S) -> Self {
        let mut tools = ToolController::new();
        tools.select_ink_tool(config.ink);
        tools.select_vector_tool(config.tool);
        tools.set_engine(config.engine);
        tools.set_color(config.color);
        tools.set_width(config.width);
        tools.set_opacity(config.opacity);
        tools.pressure_emulation = config.pressure_emulation;

        let mut board = Self {
            tools,
            paths: PathStore::new(),
            surface,
            revision: 0,
        };
        board.surface.set_ruler_active(config.ruler);
        board.surface.set_background(config.background);
        board.sync_surface_tool();
        board
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn paths(&self) -> &PathStore {
        &self.paths
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn engine(&self) -> EngineMode {
        self.tools.engine()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Route a gesture to the active engine.
    ///
    /// In vector mode the ink surface never sees the gesture; in ink mode the
    /// vector layer is a passive overlay.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match self.tools.engine() {
            EngineMode::VectorPath => match event {
                GestureEvent::Begin(point) => {
                    self.paths.begin_stroke(point, self.tools.tool_kind());
                }
                GestureEvent::Update(point) => {
                    let pressure = self.tools.pressure_emulation;
                    self.paths.extend_stroke(point, &mut self.tools.style, pressure);
                    if pressure {
                        // Width and opacity follow the pen on both engines.
                        self.sync_surface_tool();
                    }
                }
                GestureEvent::End => {
                    self.paths.end_stroke(&self.tools.style);
                }
                GestureEvent::Cancel => self.paths.cancel_stroke(),
            },
            EngineMode::BitmapInk => match event {
                GestureEvent::Begin(point) => self.surface.pointer_down(point),
                GestureEvent::Update(point) => self.surface.pointer_move(point),
                GestureEvent::End => self.surface.pointer_up(),
                GestureEvent::Cancel => self.surface.pointer_cancel(),
            },
        }
        self.touch();
    }

    /// Apply a toolbar command.
    pub fn apply(&mut self, command: Command) {
        log::debug!("Applying {command:?}");
        let engine_before = self.tools.engine();
        match command {
            Command::SelectVectorTool(kind) => self.tools.select_vector_tool(kind),
            Command::SelectInkTool(ink) => self.tools.select_ink_tool(ink),
            Command::SelectEraser => self.tools.select_eraser(),
            Command::SetEngine(engine) => self.tools.set_engine(engine),
            Command::TogglePressureEmulation => self.tools.toggle_pressure_emulation(),
            Command::ToggleRuler => {
                let active = !self.surface.is_ruler_active();
                self.surface.set_ruler_active(active);
            }
            Command::SetColor(color) => self.tools.set_color(color),
            Command::SetWidth(width) => self.tools.set_width(width),
            Command::SetOpacity(opacity) => self.tools.set_opacity(opacity),
            Command::SetBackground(color) => self.surface.set_background(color),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Clear => self.clear(),
        }

        if self.tools.engine() != engine_before {
            self.abandon_gesture(engine_before);
        }
        self.sync_surface_tool();
        self.touch();
    }

    /// Feed one recorded session step.
    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Gesture(gesture) => self.handle_gesture(gesture),
            SessionEvent::Command(command) => self.apply(command),
        }
    }

    /// Undo on the active engine.
    pub fn undo(&mut self) {
        match self.tools.engine() {
            EngineMode::VectorPath => {
                self.paths.undo();
            }
            EngineMode::BitmapInk => self.surface.undo(),
        }
        self.touch();
    }

    /// Redo on the active engine.
    pub fn redo(&mut self) {
        match self.tools.engine() {
            EngineMode::VectorPath => {
                self.paths.redo();
            }
            EngineMode::BitmapInk => self.surface.redo(),
        }
        self.touch();
    }

    /// Clear the active engine's content and history.
    pub fn clear(&mut self) {
        match self.tools.engine() {
            EngineMode::VectorPath => self.paths.clear(),
            EngineMode::BitmapInk => self.surface.clear(),
        }
        self.touch();
    }

    /// Whether undo would do anything on the active engine.
    pub fn can_undo(&self) -> bool {
        match self.tools.engine() {
            EngineMode::VectorPath => self.paths.can_undo(),
            EngineMode::BitmapInk => self.surface.can_undo(),
        }
    }

    /// Whether redo would do anything on the active engine.
    pub fn can_redo(&self) -> bool {
        match self.tools.engine() {
            EngineMode::VectorPath => self.paths.can_redo(),
            EngineMode::BitmapInk => self.surface.can_redo(),
        }
    }

    /// Snapshot of the visible state.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            revision: self.revision,
            background: self.surface.background(),
            ink: self.surface.content(),
            ink_preview: self.surface.pending(),
            strokes: self.paths.strokes(),
            preview: self.paths.in_progress().map(|path| StrokePreview {
                path,
                style: self.tools.style,
            }),
            engine: self.tools.engine(),
            selected: self.tools.selected(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Push the live ink tool to the surface.
    fn sync_surface_tool(&mut self) {
        let style = self.tools.style;
        self.surface
            .set_tool(self.tools.ink_tool(), style.color, style.width, style.opacity);
    }

    /// Drop a gesture left running on the engine that just lost input.
    fn abandon_gesture(&mut self, engine: EngineMode) {
        match engine {
            EngineMode::VectorPath => self.paths.cancel_stroke(),
            EngineMode::BitmapInk => self.surface.pointer_cancel(),
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
