//! Window management using GLFW
//!
//! Provides window creation, OpenGL context binding, and event handling.

use glfw::Context;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The process-wide GLFW subsystem could not be started
    #[error("GLFW initialization failed")]
    PlatformInit,

    /// GLFW could not allocate a window of the requested size
    #[error("Window creation failed")]
    CreationFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// Owns the GLFW subsystem handle for the life of the window; dropping the
/// wrapper releases the window and, once no other handles remain, the
/// subsystem itself.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create a window with an OpenGL 3.3 core-profile context and make
    /// that context current on the calling thread.
    ///
    /// Takes ownership of the GLFW subsystem handle; on creation failure
    /// the handle is dropped, tearing the subsystem down.
    pub fn new(mut glfw: glfw::Glfw, title: &str, width: u32, height: u32) -> WindowResult<Self> {
        // The shader sources are written against #version 330 core
        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_close_polling(true);

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Whether the platform has flagged the window for closing
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Set the window's close flag
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Present the just-rendered frame
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Process pending window events without blocking
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let glfw::WindowEvent::Close = event {
                log::debug!("Window close requested");
            }
        }
    }

    /// Get the window's client area size in pixels
    pub fn get_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }

    /// Resolve a GL entry point through the window's context.
    ///
    /// Valid only while this window's context is current.
    pub fn get_proc_address(&mut self, procname: &str) -> *const std::os::raw::c_void {
        self.window.get_proc_address(procname) as *const _
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failing_stage() {
        assert_eq!(
            WindowError::PlatformInit.to_string(),
            "GLFW initialization failed"
        );
        assert_eq!(
            WindowError::CreationFailed.to_string(),
            "Window creation failed"
        );
    }
}
