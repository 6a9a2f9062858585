//! OpenGL function loading and object wrappers
//!
//! Raw GL handles are held in owned wrapper types with explicit
//! create/release pairs, so every initialization exit path cleans up after
//! itself.

pub mod buffer;
pub mod shader;

use std::ffi::CStr;

use thiserror::Error;

use crate::render::window::Window;

pub use shader::{ShaderProgram, ShaderStage, ShaderStageKind};

/// OpenGL-side errors
#[derive(Error, Debug)]
pub enum GlError {
    /// The driver could not resolve the core GL entry points
    #[error("failed to load OpenGL function pointers")]
    LoaderFailed,

    /// A shader stage failed to compile
    #[error("{stage} shader compilation failed: {log}")]
    ShaderCompile {
        /// Which stage failed
        stage: ShaderStageKind,
        /// Driver info log, read through a bounded buffer
        log: String,
    },

    /// The compiled stages failed to link into a program
    #[error("shader program linking failed: {log}")]
    ShaderLink {
        /// Driver info log, read through a bounded buffer
        log: String,
    },
}

/// Result alias for OpenGL operations
pub type GlResult<T> = Result<T, GlError>;

/// Load GL entry points through the window's proc-address resolver.
///
/// `gl::load_with` itself never reports failure, so the entry points the
/// renderer depends on are verified afterwards. The window's context must
/// be current on the calling thread.
pub fn load_functions(window: &mut Window) -> GlResult<()> {
    gl::load_with(|symbol| window.get_proc_address(symbol));

    let loaded = gl::CreateShader::is_loaded()
        && gl::CreateProgram::is_loaded()
        && gl::GenVertexArrays::is_loaded()
        && gl::GenBuffers::is_loaded()
        && gl::Clear::is_loaded()
        && gl::DrawArrays::is_loaded();

    if loaded {
        Ok(())
    } else {
        Err(GlError::LoaderFailed)
    }
}

/// The driver's version string, if the `GL_VERSION` query is available.
pub fn version_string() -> Option<String> {
    if !gl::GetString::is_loaded() {
        return None;
    }
    let ptr = unsafe { gl::GetString(gl::VERSION) };
    if ptr.is_null() {
        return None;
    }
    let version = unsafe { CStr::from_ptr(ptr.cast()) };
    Some(version.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_errors_carry_the_stage_and_log() {
        let err = GlError::ShaderCompile {
            stage: ShaderStageKind::Vertex,
            log: "0:2(1): error: syntax error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("vertex shader compilation failed"));
        assert!(message.contains("syntax error"));
    }

    #[test]
    fn link_errors_carry_the_log() {
        let err = GlError::ShaderLink {
            log: "unresolved varying".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("linking failed"));
        assert!(message.contains("unresolved varying"));
    }
}
