use crate::gl_wrappers::{BufferObject, VertexArrayObject};
use crate::error::{Error, Result};
use std::mem::size_of;

pub const CUBE_HALF_EXTENT: f32 = 0.05;
pub const CUBE_VERTEX_COUNT: usize = 36;

#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; CUBE_VERTEX_COUNT * 3] = [
    -0.05, -0.05, -0.05,
     0.05, -0.05, -0.05,
     0.05,  0.05, -0.05,
     0.05,  0.05, -0.05,
    -0.05,  0.05, -0.05,
    -0.05, -0.05, -0.05,

    -0.05, -0.05,  0.05,
     0.05, -0.05,  0.05,
     0.05,  0.05,  0.05,
     0.05,  0.05,  0.05,
    -0.05,  0.05,  0.05,
    -0.05, -0.05,  0.05,

    -0.05,  0.05,  0.05,
    -0.05,  0.05, -0.05,
    -0.05, -0.05, -0.05,
    -0.05, -0.05, -0.05,
    -0.05, -0.05,  0.05,
    -0.05,  0.05,  0.05,

     0.05,  0.05,  0.05,
     0.05,  0.05, -0.05,
     0.05, -0.05, -0.05,
     0.05, -0.05, -0.05,
     0.05, -0.05,  0.05,
     0.05,  0.05,  0.05,

    -0.05, -0.05, -0.05,
     0.05, -0.05, -0.05,
     0.05, -0.05,  0.05,
     0.05, -0.05,  0.05,
    -0.05, -0.05,  0.05,
    -0.05, -0.05, -0.05,

    -0.05,  0.05, -0.05,
     0.05,  0.05, -0.05,
     0.05,  0.05,  0.05,
     0.05,  0.05,  0.05,
    -0.05,  0.05,  0.05,
    -0.05,  0.05, -0.05,
];

/// Same layout as [`CUBE_VERTICES`] scaled to `half_extent`.
pub fn cube_vertices(half_extent: f32) -> Vec<f32> {
    let scale = half_extent / CUBE_HALF_EXTENT;
    CUBE_VERTICES.iter().map(|v| v * scale).collect()
}

/// Position-only, non-indexed triangle mesh living on the GPU.
pub struct Mesh {
    vertex_array: VertexArrayObject,
    _vertex_buffer: BufferObject,
    pub vertex_count: i32,
}

impl Mesh {
    pub fn from_positions(positions: &[f32]) -> Result<Self> {
        let vertex_array =
            VertexArrayObject::new().ok_or(Error::GlAllocation("vertex array"))?;
        let vertex_buffer =
            BufferObject::new(gl::ARRAY_BUFFER).ok_or(Error::GlAllocation("vertex buffer"))?;

        vertex_array.bind();
        vertex_buffer.bind();
        vertex_buffer.buffer_data(
            positions.len() * size_of::<f32>(),
            positions.as_ptr().cast(),
            gl::STATIC_DRAW,
        );
        VertexArrayObject::configure_attribute(0, 3, gl::FLOAT, gl::FALSE, 3 * size_of::<f32>());
        VertexArrayObject::enable_attribute(0);
        VertexArrayObject::unbind();

        Ok(Self {
            vertex_array,
            _vertex_buffer: vertex_buffer,
            vertex_count: (positions.len() / 3) as i32,
        })
    }

    pub fn cube(half_extent: f32) -> Result<Self> {
        Self::from_positions(&cube_vertices(half_extent))
    }

    pub fn bind(&self) {
        self.vertex_array.bind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_is_six_faces_of_two_triangles() {
        assert_eq!(CUBE_VERTICES.len() / 3, 6 * 2 * 3);
    }

    #[test]
    fn every_coordinate_sits_on_the_half_extent() {
        assert!(CUBE_VERTICES
            .iter()
            .all(|v| (v.abs() - CUBE_HALF_EXTENT).abs() < f32::EPSILON));
    }

    #[test]
    fn each_face_is_planar() {
        for face in CUBE_VERTICES.chunks_exact(18) {
            let constant_axis = (0..3).any(|axis| {
                let first = face[axis];
                face.chunks_exact(3).all(|vertex| vertex[axis] == first)
            });
            assert!(constant_axis);
        }
    }

    #[test]
    fn scaled_cube_keeps_layout() {
        let cube = cube_vertices(0.5);
        assert_eq!(cube.len(), CUBE_VERTICES.len());
        for (scaled, base) in cube.iter().zip(CUBE_VERTICES.iter()) {
            assert!((scaled - base * 10.0).abs() < 1e-6);
        }
        assert_eq!(cube_vertices(CUBE_HALF_EXTENT), CUBE_VERTICES.to_vec());
    }
}
