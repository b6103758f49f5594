//! InkBoard Core Library
//!
//! Platform-agnostic drawing engine: vector strokes with undo/redo next to a
//! stylus ink surface, driven through one tool and history interface.

pub mod canvas;
pub mod color;
pub mod config;
pub mod ink;
pub mod input;
pub mod paths;
pub mod shapes;
pub mod tools;

pub use canvas::{Frame, StrokePreview, Whiteboard};
pub use color::{ParseColorError, Rgba};
pub use config::{BoardConfig, ConfigError, ConfigResult};
pub use ink::{InkDrawing, InkStroke, InkSurface, InkTool, InkType, SoftwareInkSurface};
pub use input::{Command, GestureEvent, SessionEvent};
pub use paths::{PathStore, emulate_pressure};
pub use shapes::{Stroke, StrokeId, StrokeStyle, compute_path};
pub use tools::{EngineMode, ToolController, ToolId, ToolKind};
