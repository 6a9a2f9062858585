//! Per-frame triangle rendering
//!
//! The vertex array/buffer pair is created fresh every frame rather than
//! cached across iterations. This is an intentional simplification for a
//! single-triangle scene, not a contract.

use gl::types::GLsizei;

use crate::render::mesh::TriangleMesh;
use crate::render::opengl::buffer::{VertexArray, VertexBuffer};
use crate::render::opengl::{GlResult, ShaderProgram};

/// GLSL vertex stage: pass the position attribute straight to clip space
pub const VERTEX_SHADER_SOURCE: &str = "\
#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

/// GLSL fragment stage: constant opaque orange
pub const FRAGMENT_SHADER_SOURCE: &str = "\
#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/// Renderer owning the linked shader program and the triangle data
///
/// The program is built once and reused unchanged on every frame.
pub struct TriangleRenderer {
    program: ShaderProgram,
    mesh: TriangleMesh,
}

impl TriangleRenderer {
    /// Compile and link the fixed shader pair.
    ///
    /// Requires loaded GL entry points and a current context.
    pub fn new(mesh: TriangleMesh) -> GlResult<Self> {
        let program = ShaderProgram::from_sources(VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)?;
        Ok(Self { program, mesh })
    }

    /// Render one frame: clear the color buffer, then draw the triangle
    pub fn draw_frame(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
        self.draw_triangle();
    }

    /// Issue the triangle draw: one 3-float position attribute, tightly
    /// packed, 3 vertices starting at index 0.
    fn draw_triangle(&self) {
        let vao = VertexArray::new();
        let _vbo = VertexBuffer::with_static_data(self.mesh.as_bytes());

        unsafe {
            gl::VertexAttribPointer(
                0,
                3,
                gl::FLOAT,
                gl::FALSE,
                3 * std::mem::size_of::<f32>() as GLsizei,
                std::ptr::null(),
            );
            gl::EnableVertexAttribArray(0);
        }

        VertexBuffer::unbind();
        VertexArray::unbind();

        self.program.bind();
        vao.bind();
        unsafe { gl::DrawArrays(gl::TRIANGLES, 0, self.mesh.vertex_count()) };

        // vao and _vbo drop here, releasing the per-frame objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_source_targets_gl33_core() {
        assert!(VERTEX_SHADER_SOURCE.starts_with("#version 330 core"));
        assert!(VERTEX_SHADER_SOURCE.contains("layout (location = 0) in vec3 aPos;"));
        assert!(VERTEX_SHADER_SOURCE.contains("gl_Position"));
    }

    #[test]
    fn fragment_source_emits_constant_orange() {
        assert!(FRAGMENT_SHADER_SOURCE.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER_SOURCE.contains("vec4(1.0, 0.5, 0.2, 1.0)"));
    }
}
