use glam::Vec3;
use rand::Rng;

use super::error::{check_triangle_count, GeometryResult};
use super::mesh::Mesh;
use super::vertex::Vertex;

/// Which per-triangle attributes to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeSet {
    /// `aRandom` only
    Random,
    /// `aRandom` and `aCenter`
    RandomAndCenter,
}

/// Per-vertex attribute buffers, indexed exactly like the mesh vertices
///
/// All three vertices of a triangle carry the same random value and the
/// same centroid. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    random: Vec<f32>,
    center: Option<Vec<[f32; 3]>>,
}

impl Annotations {
    /// `aRandom`, one entry per vertex
    pub fn random(&self) -> &[f32] {
        &self.random
    }

    /// `aCenter`, one entry per vertex when requested
    pub fn center(&self) -> Option<&[[f32; 3]]> {
        self.center.as_deref()
    }

    pub fn len(&self) -> usize {
        self.random.len()
    }

    pub fn is_empty(&self) -> bool {
        self.random.is_empty()
    }

    pub const RANDOM_ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![3 => Float32];
    pub const CENTER_ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![4 => Float32x3];

    pub fn random_desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<f32>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::RANDOM_ATTRIBS,
        }
    }

    pub fn center_desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::CENTER_ATTRIBS,
        }
    }
}

/// Arithmetic mean of a triangle's corners
pub fn triangle_centroid(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (a + b + c) / 3.0
}

/// Annotate a validated mesh; cannot fail since the mesh holds whole triangles
pub fn annotate<R: Rng + ?Sized>(mesh: &Mesh, set: AttributeSet, rng: &mut R) -> Annotations {
    annotate_triangles(mesh.vertices(), set, rng)
}

/// Annotate a raw non-indexed vertex list, rejecting trailing vertices
pub fn annotate_vertices<R: Rng + ?Sized>(
    vertices: &[Vertex],
    set: AttributeSet,
    rng: &mut R,
) -> GeometryResult<Annotations> {
    check_triangle_count(vertices.len())?;
    Ok(annotate_triangles(vertices, set, rng))
}

fn annotate_triangles<R: Rng + ?Sized>(vertices: &[Vertex], set: AttributeSet, rng: &mut R) -> Annotations {
    let mut random = Vec::with_capacity(vertices.len());
    let mut center = match set {
        AttributeSet::Random => None,
        AttributeSet::RandomAndCenter => Some(Vec::with_capacity(vertices.len())),
    };

    for tri in vertices.chunks_exact(3) {
        let r: f32 = rng.gen();
        random.extend([r; 3]);

        if let Some(center) = center.as_mut() {
            let c = triangle_centroid(tri[0].position(), tri[1].position(), tri[2].position());
            center.extend([c.to_array(); 3]);
        }
    }

    Annotations { random, center }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::error::GeometryError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tri(offset: f32) -> [Vertex; 3] {
        [
            Vertex::new([offset, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
            Vertex::new([offset + 1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
            Vertex::new([offset, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ]
    }

    #[test]
    fn random_only_skips_centers() {
        let mesh = Mesh::new(tri(0.0).to_vec()).unwrap();
        let ann = annotate(&mesh, AttributeSet::Random, &mut StdRng::seed_from_u64(1));
        assert_eq!(ann.len(), 3);
        assert!(ann.center().is_none());
    }

    #[test]
    fn trailing_vertices_rejected() {
        let mut verts = tri(0.0).to_vec();
        verts.push(verts[0]);
        let err = annotate_vertices(&verts, AttributeSet::Random, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, GeometryError::IncompleteTriangle { count: 4, remainder: 1 });
    }

    #[test]
    fn empty_input_gives_empty_buffers() {
        let ann = annotate_vertices(&[], AttributeSet::RandomAndCenter, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(ann.is_empty());
        assert_eq!(ann.center().map(<[_]>::len), Some(0));
    }

    #[test]
    fn same_seed_is_reproducible() {
        let verts: Vec<_> = (0..4).flat_map(|i| tri(i as f32)).collect();
        let a = annotate_vertices(&verts, AttributeSet::RandomAndCenter, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = annotate_vertices(&verts, AttributeSet::RandomAndCenter, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn attribute_layouts_use_free_locations() {
        assert_eq!(Annotations::RANDOM_ATTRIBS[0].shader_location, 3);
        assert_eq!(Annotations::CENTER_ATTRIBS[0].shader_location, 4);
        assert_eq!(Annotations::center_desc().array_stride, 12);
    }
}
