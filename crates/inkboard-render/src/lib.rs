//! InkBoard Render Library
//!
//! Renderer abstraction and implementations for InkBoard.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{
    RenderContext, RenderResult, Renderer, RendererError, ink_stroke_color, ink_stroke_path,
    ink_stroke_width,
};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
