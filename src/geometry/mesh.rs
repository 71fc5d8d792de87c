use glam::Vec3;

use super::error::{check_triangle_count, GeometryError, GeometryResult};
use super::vertex::Vertex;
use crate::math::AABB;

/// Non-indexed triangle mesh: every triangle owns three consecutive vertices
///
/// The vertex count is always a multiple of 3; constructors reject anything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    /// Wrap an already non-indexed vertex list
    pub fn new(vertices: Vec<Vertex>) -> GeometryResult<Self> {
        check_triangle_count(vertices.len())?;
        Ok(Self { vertices })
    }

    /// Expand an indexed mesh so that no vertex is shared between triangles
    pub fn from_indexed(vertices: &[Vertex], indices: &[u32]) -> GeometryResult<Self> {
        if indices.len() % 3 != 0 {
            return Err(GeometryError::IncompleteIndexedTriangle { count: indices.len() });
        }

        let expanded = indices
            .iter()
            .map(|&index| {
                vertices
                    .get(index as usize)
                    .copied()
                    .ok_or(GeometryError::IndexOutOfRange {
                        index,
                        vertex_count: vertices.len(),
                    })
            })
            .collect::<GeometryResult<Vec<_>>>()?;

        Ok(Self { vertices: expanded })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate triangles as vertex triples
    pub fn triangles(&self) -> impl Iterator<Item = &[Vertex; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .filter_map(|tri| <&[Vertex; 3]>::try_from(tri).ok())
    }

    /// Reverse the winding of every triangle, normals are left as authored
    pub fn flip_winding(mut self) -> Self {
        for tri in self.vertices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        self
    }

    /// Apply an affine transform to positions, normals follow the inverse transpose
    pub fn transformed(mut self, transform: glam::Mat4) -> Self {
        let normal_matrix = glam::Mat3::from_mat4(transform).inverse().transpose();
        for v in &mut self.vertices {
            v.position = transform.transform_point3(v.position()).to_array();
            v.normal = (normal_matrix * v.normal()).normalize_or_zero().to_array();
        }
        self
    }

    /// Append another mesh's triangles
    pub fn extend(&mut self, other: Mesh) {
        self.vertices.extend(other.vertices);
    }

    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.vertices.iter().map(Vertex::position))
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

/// Face normal of a triangle, counter-clockwise winding
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vertex {
        Vertex::new([x, y, z], [0.0, 0.0, 1.0], [0.0, 0.0])
    }

    #[test]
    fn new_rejects_partial_triangles() {
        let err = Mesh::new(vec![v(0.0, 0.0, 0.0); 4]).unwrap_err();
        assert_eq!(err, GeometryError::IncompleteTriangle { count: 4, remainder: 1 });
    }

    #[test]
    fn from_indexed_duplicates_shared_vertices() {
        let verts = [v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(0.0, 1.0, 0.0)];
        let mesh = Mesh::from_indexed(&verts, &[0, 1, 2, 0, 2, 3]).unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices()[3], verts[0]);
        assert_eq!(mesh.vertices()[5], verts[3]);
    }

    #[test]
    fn from_indexed_rejects_bad_indices() {
        let verts = [v(0.0, 0.0, 0.0)];
        assert_eq!(
            Mesh::from_indexed(&verts, &[0, 0, 3]),
            Err(GeometryError::IndexOutOfRange { index: 3, vertex_count: 1 })
        );
        assert_eq!(
            Mesh::from_indexed(&verts, &[0, 0]),
            Err(GeometryError::IncompleteIndexedTriangle { count: 2 })
        );
    }

    #[test]
    fn flip_winding_swaps_order_only() {
        let mesh = Mesh::new(vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)]).unwrap();
        let flipped = mesh.flip_winding();
        let tri = flipped.triangles().next().unwrap();

        assert_eq!(tri[1].position, [0.0, 1.0, 0.0]);
        assert_eq!(tri[2].position, [1.0, 0.0, 0.0]);
        assert_eq!(tri[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn face_normal_follows_ccw() {
        let n = face_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(n, Vec3::Z);
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let mesh = Mesh::new(vec![v(-1.0, 0.0, 2.0), v(1.0, 3.0, 0.0), v(0.0, -2.0, 1.0)]).unwrap();
        let b = mesh.bounds().unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 3.0, 2.0));
        assert!(Mesh::default().bounds().is_none());
    }
}
