//! Shader compilation and program linking
//!
//! Each GL object is owned by a wrapper that releases it on drop, so a
//! stage that fails to compile or a program that fails to link never
//! leaks its handle.

use std::ffi::CString;
use std::fmt;

use gl::types::{GLenum, GLint, GLsizei, GLuint};

use super::{GlError, GlResult};

/// Info logs are read through a bounded buffer of this size.
const INFO_LOG_CAPACITY: usize = 512;

/// Shader stage discriminator, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStageKind {
    /// Per-vertex stage
    Vertex,
    /// Per-fragment stage
    Fragment,
}

impl ShaderStageKind {
    fn gl_enum(self) -> GLenum {
        match self {
            Self::Vertex => gl::VERTEX_SHADER,
            Self::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// A compiled shader stage with RAII cleanup
pub struct ShaderStage {
    id: GLuint,
    kind: ShaderStageKind,
}

impl ShaderStage {
    /// Compile a shader stage from GLSL source.
    ///
    /// On compile failure the driver's info log is captured in the error
    /// and the stage object is released.
    pub fn compile(kind: ShaderStageKind, source: &str) -> GlResult<Self> {
        let source = CString::new(source).map_err(|_| GlError::ShaderCompile {
            stage: kind,
            log: "source contains an interior NUL byte".to_string(),
        })?;

        let id = unsafe { gl::CreateShader(kind.gl_enum()) };
        let stage = Self { id, kind };

        unsafe {
            gl::ShaderSource(stage.id, 1, &source.as_ptr(), std::ptr::null());
            gl::CompileShader(stage.id);
        }

        let mut success: GLint = 0;
        unsafe { gl::GetShaderiv(stage.id, gl::COMPILE_STATUS, &mut success) };
        if success == 0 {
            let log = read_info_log(stage.id, InfoLogSource::Shader);
            return Err(GlError::ShaderCompile { stage: kind, log });
        }

        Ok(stage)
    }

    /// Get the shader object handle
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Which stage this object was compiled as
    pub fn kind(&self) -> ShaderStageKind {
        self.kind
    }
}

impl Drop for ShaderStage {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.id) };
    }
}

/// A linked shader program with RAII cleanup
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Compile both stages from source and link them into one program.
    pub fn from_sources(vertex_source: &str, fragment_source: &str) -> GlResult<Self> {
        let vertex = ShaderStage::compile(ShaderStageKind::Vertex, vertex_source)?;
        let fragment = ShaderStage::compile(ShaderStageKind::Fragment, fragment_source)?;
        Self::link(vertex, fragment)
    }

    /// Link compiled vertex and fragment stages into one program.
    ///
    /// The stage objects are consumed; once the program is linked they are
    /// no longer needed and are released when this function returns.
    pub fn link(vertex: ShaderStage, fragment: ShaderStage) -> GlResult<Self> {
        let id = unsafe { gl::CreateProgram() };
        let program = Self { id };

        unsafe {
            gl::AttachShader(program.id, vertex.id());
            gl::AttachShader(program.id, fragment.id());
            gl::LinkProgram(program.id);
        }

        let mut success: GLint = 0;
        unsafe { gl::GetProgramiv(program.id, gl::LINK_STATUS, &mut success) };
        if success == 0 {
            let log = read_info_log(program.id, InfoLogSource::Program);
            return Err(GlError::ShaderLink { log });
        }

        Ok(program)
    }

    /// Bind the program for subsequent draw calls
    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) };
    }

    /// Get the program object handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) };
    }
}

enum InfoLogSource {
    Shader,
    Program,
}

fn read_info_log(id: GLuint, source: InfoLogSource) -> String {
    let mut buffer = vec![0u8; INFO_LOG_CAPACITY];
    let mut length: GLsizei = 0;
    unsafe {
        match source {
            InfoLogSource::Shader => gl::GetShaderInfoLog(
                id,
                buffer.len() as GLsizei,
                &mut length,
                buffer.as_mut_ptr().cast(),
            ),
            InfoLogSource::Program => gl::GetProgramInfoLog(
                id,
                buffer.len() as GLsizei,
                &mut length,
                buffer.as_mut_ptr().cast(),
            ),
        }
    }
    let length = length.clamp(0, buffer.len() as GLsizei) as usize;
    String::from_utf8_lossy(&buffer[..length]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_kinds_display_as_lowercase_names() {
        assert_eq!(ShaderStageKind::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStageKind::Fragment.to_string(), "fragment");
    }

    #[test]
    fn stage_kinds_map_to_gl_enums() {
        assert_eq!(ShaderStageKind::Vertex.gl_enum(), gl::VERTEX_SHADER);
        assert_eq!(ShaderStageKind::Fragment.gl_enum(), gl::FRAGMENT_SHADER);
    }
}
