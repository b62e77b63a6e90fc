//! Renderer boundary
//!
//! The dispatcher never talks to a rendering host directly; it drives the
//! `Renderer` trait, one method per visual concept. The crate ships
//! `TraceRenderer`, which logs every parameter write.

mod renderer;
mod trace;

pub use renderer::{AiVisualParams, ParticleEffect, Renderer, Speaker};
pub use trace::TraceRenderer;
