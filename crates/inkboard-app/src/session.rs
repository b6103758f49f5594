//! Session replay.

use inkboard_core::{
    BoardConfig, ConfigError, EngineMode, InkSurface, SessionEvent, SoftwareInkSurface, Whiteboard,
};
use inkboard_render::RendererError;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid session script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("Usage: inkboard [config.json] <script.json>")]
    Usage,
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Read a session script: a JSON array of events.
pub fn load_script(path: impl AsRef<Path>) -> AppResult<Vec<SessionEvent>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let events: Vec<SessionEvent> = serde_json::from_str(&json)?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Replay events against a fresh whiteboard.
pub fn run_session(
    config: &BoardConfig,
    events: impl IntoIterator<Item = SessionEvent>,
) -> Whiteboard<SoftwareInkSurface> {
    let mut board = Whiteboard::with_config(config, SoftwareInkSurface::new());
    for event in events {
        log::trace!("Event: {:?}", event);
        board.handle_event(event);
    }
    board
}

/// Viewport the final scene is built for.
#[cfg(feature = "vello-renderer")]
pub const VIEWPORT: (f64, f64) = (1024.0, 768.0);

/// Build the board's current frame with Vello and return the scene's path count.
#[cfg(feature = "vello-renderer")]
pub fn scene_paths<S: InkSurface>(board: &Whiteboard<S>) -> AppResult<u32> {
    use inkboard_render::{RenderContext, Renderer, VelloRenderer};

    let mut renderer = VelloRenderer::new();
    let ctx = RenderContext::new(board.frame(), kurbo::Size::new(VIEWPORT.0, VIEWPORT.1));
    renderer.build_scene(&ctx)?;
    let paths = renderer.scene().encoding().n_paths;
    log::debug!("Built final scene with {} paths", paths);
    Ok(paths)
}

/// What a replayed session left behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub engine: EngineMode,
    pub vector_strokes: usize,
    pub ink_strokes: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub revision: u64,
}

impl SessionSummary {
    pub fn of<S: InkSurface>(board: &Whiteboard<S>) -> Self {
        Self {
            engine: board.engine(),
            vector_strokes: board.paths().len(),
            ink_strokes: board.surface().content().len(),
            can_undo: board.can_undo(),
            can_redo: board.can_redo(),
            revision: board.revision(),
        }
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vector strokes, {} ink strokes (engine: {:?}, undo: {}, redo: {})",
            self.vector_strokes, self.ink_strokes, self.engine, self.can_undo, self.can_redo
        )
    }
}
