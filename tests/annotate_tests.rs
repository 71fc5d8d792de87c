use disintegration::geometry::{annotate, annotate_vertices, triangle_centroid, AttributeSet, GeometryError, Mesh, Vertex};
use disintegration::geometry::primitives::icosahedron;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(test)]
mod annotate_tests {
    use super::*;

    fn unit_triangle() -> Vec<Vertex> {
        vec![
            Vertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
            Vertex::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
            Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ]
    }

    #[test]
    fn test_every_triangle_shares_one_random_value() {
        let mesh = icosahedron(1.0, 3);
        let ann = annotate(&mesh, AttributeSet::RandomAndCenter, &mut StdRng::seed_from_u64(42));

        assert_eq!(ann.random().len(), mesh.vertex_count());
        for tri in ann.random().chunks_exact(3) {
            assert_eq!(tri[0], tri[1]);
            assert_eq!(tri[1], tri[2]);
        }
    }

    #[test]
    fn test_every_triangle_shares_one_center() {
        let mesh = icosahedron(1.0, 2);
        let ann = annotate(&mesh, AttributeSet::RandomAndCenter, &mut StdRng::seed_from_u64(42));
        let center = ann.center().unwrap();

        assert_eq!(center.len(), mesh.vertex_count());
        for (tri, c) in mesh.triangles().zip(center.chunks_exact(3)) {
            assert_eq!(c[0], c[1]);
            assert_eq!(c[1], c[2]);
            let expected = triangle_centroid(tri[0].position(), tri[1].position(), tri[2].position());
            assert!(Vec3::from_array(c[0]).abs_diff_eq(expected, 1e-6));
        }
    }

    #[test]
    fn test_unit_triangle_centroid() {
        let ann = annotate_vertices(&unit_triangle(), AttributeSet::RandomAndCenter, &mut StdRng::seed_from_u64(0)).unwrap();
        let c = Vec3::from_array(ann.center().unwrap()[0]);

        assert!(c.abs_diff_eq(Vec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0), 1e-6), "{:?}", c);
    }

    #[test]
    fn test_random_values_in_unit_interval() {
        let mesh = icosahedron(1.0, 3);
        let ann = annotate(&mesh, AttributeSet::Random, &mut StdRng::seed_from_u64(7));

        assert!(ann.random().iter().all(|r| (0.0..1.0).contains(r)));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mesh = icosahedron(1.0, 1);
        let a = annotate(&mesh, AttributeSet::Random, &mut StdRng::seed_from_u64(1));
        let b = annotate(&mesh, AttributeSet::Random, &mut StdRng::seed_from_u64(2));

        assert_ne!(a.random(), b.random());
    }

    #[test]
    fn test_triangles_are_not_all_equal() {
        let mesh = icosahedron(1.0, 1);
        let ann = annotate(&mesh, AttributeSet::Random, &mut StdRng::seed_from_u64(3));
        let first = ann.random()[0];

        assert!(ann.random().iter().any(|&r| r != first));
    }

    #[test]
    fn test_incomplete_triangle_rejected() {
        let mut verts = unit_triangle();
        verts.truncate(2);

        assert_eq!(
            Mesh::new(verts.clone()).unwrap_err(),
            GeometryError::IncompleteTriangle { count: 2, remainder: 2 }
        );
        assert!(annotate_vertices(&verts, AttributeSet::Random, &mut StdRng::seed_from_u64(0)).is_err());
    }
}
