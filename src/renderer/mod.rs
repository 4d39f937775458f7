//! Rendering module
//!
//! The scene builder is platform-neutral; the canvas backend only exists on wasm32.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCommand, build_frame};
