//! 2D rendering module
//!
//! The scene issues immediate-mode draw calls against a `Surface`; the
//! browser canvas is one backend, a recording buffer is the other.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod paint;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use paint::{LinearGradient, Paint, Rgba};
pub use scene::render;
pub use surface::{CommandBuffer, DrawCommand, Surface, TextAlign, TextStyle};
