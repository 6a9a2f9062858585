//! # GL Engine
//!
//! A minimal OpenGL windowing and rendering scaffold built on GLFW.
//!
//! The crate exposes one component, [`RenderWindow`]: it creates a window
//! with an OpenGL context, loads the GL entry points, builds a fixed shader
//! program, and rasterizes a single static triangle every frame until the
//! window is closed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::{RenderWindow, WindowConfig};
//!
//! fn main() {
//!     gl_engine::foundation::logging::init();
//!
//!     let mut window = RenderWindow::new(WindowConfig::default());
//!     match window.initialize() {
//!         Ok(()) => {
//!             if let Err(err) = window.run() {
//!                 log::error!("Frame loop failed: {}", err);
//!             }
//!         }
//!         Err(err) => log::error!("Initialization failed: {}", err),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod render;

mod engine;

pub use engine::{EngineError, LifecycleState, RenderWindow, WindowConfig};
