//! Owned wrappers for vertex array and vertex buffer objects

use gl::types::{GLsizeiptr, GLuint};

/// Vertex buffer object holding raw vertex bytes
pub struct VertexBuffer {
    id: GLuint,
}

impl VertexBuffer {
    /// Create a buffer object and upload `data` with a static-draw usage
    /// hint. The buffer is left bound to `GL_ARRAY_BUFFER`.
    pub fn with_static_data(data: &[u8]) -> Self {
        let mut id: GLuint = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                data.len() as GLsizeiptr,
                data.as_ptr().cast(),
                gl::STATIC_DRAW,
            );
        }
        Self { id }
    }

    /// Clear the `GL_ARRAY_BUFFER` binding
    pub fn unbind() {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, 0) };
    }

    /// Get the buffer object handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) };
    }
}

/// Vertex array object describing the vertex layout of a draw call
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    /// Create a vertex array object and bind it
    pub fn new() -> Self {
        let mut id: GLuint = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
            gl::BindVertexArray(id);
        }
        Self { id }
    }

    /// Bind this vertex array
    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) };
    }

    /// Clear the vertex array binding
    pub fn unbind() {
        unsafe { gl::BindVertexArray(0) };
    }

    /// Get the vertex array object handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Default for VertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) };
    }
}
