//! Rendering subsystem
//!
//! Window management and the OpenGL draw path. The split mirrors the two
//! external collaborators: `window` talks to the windowing system (GLFW),
//! `opengl` talks to the GPU driver, and `renderer` composes them into the
//! per-frame triangle draw.

pub mod mesh;
pub mod opengl;
pub mod renderer;
pub mod window;

pub use renderer::TriangleRenderer;
pub use window::{Window, WindowError};
