//! Render window lifecycle and the frame loop

use thiserror::Error;

use crate::render::mesh::TriangleMesh;
use crate::render::opengl::{self, GlError};
use crate::render::renderer::TriangleRenderer;
use crate::render::window::{Window, WindowError};

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello Triangle".to_string(),
            width: 640,
            height: 480,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Windowing system error
    #[error("window error: {0}")]
    Window(#[from] WindowError),

    /// OpenGL loading or shader build error
    #[error("OpenGL error: {0}")]
    Gl(#[from] GlError),

    /// The frame loop was started before a successful `initialize`
    #[error("render window is not initialized")]
    NotInitialized,
}

/// Lifecycle states of a [`RenderWindow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed; `initialize` has not succeeded yet
    Uninitialized,
    /// Window, GL entry points, and shader program are ready
    Initialized,
    /// The frame loop is executing
    Running,
    /// The close flag was observed and the loop returned
    Closed,
}

/// The single renderable window
///
/// Owns the platform window, the linked shader program, and the fixed
/// triangle drawn every frame. One instance per process; the platform
/// window exists only between a successful [`initialize`](Self::initialize)
/// and drop.
pub struct RenderWindow {
    config: WindowConfig,
    mesh: TriangleMesh,
    glfw: Option<glfw::Glfw>,
    window: Option<Window>,
    renderer: Option<TriangleRenderer>,
    state: LifecycleState,
}

impl RenderWindow {
    /// Create a render window from the given configuration.
    ///
    /// Acquires the process-wide GLFW subsystem. Acquisition failure is
    /// logged here and deferred: [`initialize`](Self::initialize) reports
    /// it as a platform error. Construction itself never fails.
    pub fn new(config: WindowConfig) -> Self {
        let glfw = match glfw::init(glfw::log_errors) {
            Ok(glfw) => Some(glfw),
            Err(err) => {
                log::error!("Failed to initialize GLFW: {}", err);
                None
            }
        };

        Self {
            config,
            mesh: TriangleMesh::new(),
            glfw,
            window: None,
            renderer: None,
            state: LifecycleState::Uninitialized,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The configuration this window was constructed with
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Create the window, load the GL entry points, and build the shader
    /// program. Must succeed before [`run`](Self::run).
    ///
    /// Errors are terminal: on any failure the instance stays
    /// uninitialized and every resource acquired so far, including the
    /// window itself, is released.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        let glfw = self.glfw.take().ok_or(WindowError::PlatformInit)?;

        log::info!(
            "Creating {}x{} window \"{}\"...",
            self.config.width,
            self.config.height,
            self.config.title
        );
        let mut window = Window::new(
            glfw,
            &self.config.title,
            self.config.width,
            self.config.height,
        )?;

        log::info!("Loading OpenGL function pointers...");
        opengl::load_functions(&mut window)?;
        if let Some(version) = opengl::version_string() {
            log::debug!("OpenGL version: {}", version);
        }

        log::info!("Building shader program...");
        let renderer = TriangleRenderer::new(self.mesh)?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.state = LifecycleState::Initialized;
        log::info!("Render window initialized");
        Ok(())
    }

    /// Run the frame loop until the window's close flag is set.
    ///
    /// Each iteration clears the color buffer, draws the triangle,
    /// presents the frame, and polls window events. Observing the close
    /// flag at the top of an iteration is a normal return, not an error.
    pub fn run(&mut self) -> Result<(), EngineError> {
        if self.state != LifecycleState::Initialized {
            return Err(EngineError::NotInitialized);
        }
        let window = self.window.as_mut().ok_or(EngineError::NotInitialized)?;
        let renderer = self.renderer.as_ref().ok_or(EngineError::NotInitialized)?;

        self.state = LifecycleState::Running;
        log::info!("Entering frame loop");

        while !window.should_close() {
            renderer.draw_frame();
            window.swap_buffers();
            window.poll_events();
        }

        self.state = LifecycleState::Closed;
        log::info!("Close requested, leaving frame loop");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_hello_triangle_640x480() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.title, "Hello Triangle");
    }

    #[test]
    fn fresh_window_is_uninitialized() {
        // Must hold even on a headless machine where the GLFW subsystem
        // cannot start: construction defers that failure.
        let window = RenderWindow::new(WindowConfig::default());
        assert_eq!(window.state(), LifecycleState::Uninitialized);
    }

    #[test]
    fn run_before_initialize_is_rejected() {
        let mut window = RenderWindow::new(WindowConfig::default());
        let result = window.run();
        assert!(matches!(result, Err(EngineError::NotInitialized)));
        // The rejected call must not advance the lifecycle
        assert_eq!(window.state(), LifecycleState::Uninitialized);
    }

    #[test]
    fn not_initialized_error_is_descriptive() {
        assert_eq!(
            EngineError::NotInitialized.to_string(),
            "render window is not initialized"
        );
    }

    #[test]
    fn window_errors_convert_to_engine_errors() {
        let err = EngineError::from(WindowError::PlatformInit);
        assert_eq!(err.to_string(), "window error: GLFW initialization failed");
    }
}
