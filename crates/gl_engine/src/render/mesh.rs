//! Vertex data for the fixed triangle

/// A single position-only vertex in normalized device coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in NDC
    pub position: [f32; 3],
}

unsafe impl bytemuck::Pod for Vertex {}
unsafe impl bytemuck::Zeroable for Vertex {}

/// The fixed 3-vertex triangle drawn every frame
///
/// Defined at construction and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleMesh {
    vertices: [Vertex; 3],
}

impl TriangleMesh {
    /// The triangle spanning the center of the viewport
    pub fn new() -> Self {
        Self {
            vertices: [
                Vertex {
                    position: [-0.5, -0.5, 0.0],
                },
                Vertex {
                    position: [0.5, -0.5, 0.0],
                },
                Vertex {
                    position: [0.0, 0.5, 0.0],
                },
            ],
        }
    }

    /// Number of vertices submitted per draw call
    pub fn vertex_count(&self) -> i32 {
        self.vertices.len() as i32
    }

    /// Vertex data viewed as raw bytes for the GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Vertex data viewed as a flat float slice
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn triangle_is_three_vertices_nine_floats() {
        let mesh = TriangleMesh::new();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.as_floats().len(), 9);
        assert_eq!(mesh.as_bytes().len(), 9 * std::mem::size_of::<f32>());
    }

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 3 * std::mem::size_of::<f32>());
    }

    #[test]
    fn triangle_vertices_hold_the_fixed_ndc_positions() {
        let mesh = TriangleMesh::new();
        let expected: [f32; 9] = [-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0];
        for (actual, expected) in mesh.as_floats().iter().zip(expected.iter()) {
            assert_relative_eq!(*actual, *expected);
        }
    }

    #[test]
    fn triangle_data_is_identical_across_instances() {
        // The mesh carries no per-frame state; every instance views the
        // same immutable data.
        assert_eq!(TriangleMesh::new(), TriangleMesh::default());
    }
}
