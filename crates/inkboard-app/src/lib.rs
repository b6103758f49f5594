//! Inkboard Application
//!
//! Replays recorded sessions against a whiteboard and reports the result.

mod session;

pub use session::{AppError, AppResult, SessionSummary, load_script, run_session};

#[cfg(feature = "vello-renderer")]
pub use session::{VIEWPORT, scene_paths};
