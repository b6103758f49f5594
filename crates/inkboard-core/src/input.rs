//! Input events consumed by the whiteboard.

use crate::color::Rgba;
use crate::ink::InkType;
use crate::tools::{EngineMode, ToolKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Drag gesture phases, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureEvent {
    Begin(Point),
    Update(Point),
    End,
    /// The platform took the touch away (e.g. a system gesture).
    Cancel,
}

/// Discrete commands issued by toolbar buttons and sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    SelectVectorTool(ToolKind),
    SelectInkTool(InkType),
    SelectEraser,
    /// Switch engines without changing either engine's tool.
    SetEngine(EngineMode),
    TogglePressureEmulation,
    ToggleRuler,
    SetColor(Rgba),
    SetWidth(f64),
    SetOpacity(f64),
    SetBackground(Rgba),
    Undo,
    Redo,
    Clear,
}

/// One step of a recorded session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    Gesture(GestureEvent),
    Command(Command),
}

impl From<GestureEvent> for SessionEvent {
    fn from(event: GestureEvent) -> Self {
        SessionEvent::Gesture(event)
    }
}

impl From<Command> for SessionEvent {
    fn from(command: Command) -> Self {
        SessionEvent::Command(command)
    }
}
