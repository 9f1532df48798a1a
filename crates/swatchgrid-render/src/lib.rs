//! Swatchgrid Render Library
//!
//! Painter abstraction for replaying picker draw commands.
//! The default implementation records them into a Vello scene.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{Painter, RenderContext, RenderResult, RendererError, paint, to_peniko};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
