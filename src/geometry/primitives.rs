use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use super::mesh::Mesh;
use super::vertex::Vertex;

const ICOSAHEDRON_INDICES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

fn icosahedron_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Subdivided icosahedron projected onto a sphere
///
/// Each of the 20 faces is split into `(detail + 1)^2` triangles. Normals are
/// the normalised positions and UVs are spherical with the seam corrected,
/// so `icosahedron(1.0, 3)` gives 320 triangles.
pub fn icosahedron(radius: f32, detail: u32) -> Mesh {
    let corners = icosahedron_corners();
    let cols = detail as usize + 1;

    let mut positions = Vec::with_capacity(ICOSAHEDRON_INDICES.len() * cols * cols * 3);
    for [a, b, c] in ICOSAHEDRON_INDICES {
        subdivide_face(corners[a], corners[b], corners[c], cols, &mut positions);
    }

    for p in &mut positions {
        *p = p.normalize() * radius;
    }

    let uvs = spherical_uvs(&positions);
    let vertices = positions
        .iter()
        .zip(uvs)
        .map(|(&p, uv)| Vertex::from_vectors(p, p.normalize(), uv))
        .collect();

    // Always whole triangles by construction
    Mesh::new(vertices).unwrap_or_default()
}

fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, cols: usize, out: &mut Vec<Vec3>) {
    // grid[i][j]: row i walks from the a-b edge toward c
    let grid: Vec<Vec<Vec3>> = (0..=cols)
        .map(|i| {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(c, t);
            let bj = b.lerp(c, t);
            let rows = cols - i;
            (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect()
        })
        .collect();

    for i in 0..cols {
        for j in 0..(2 * (cols - i) - 1) {
            let k = j / 2;
            if j % 2 == 0 {
                out.extend([grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
            } else {
                out.extend([grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
            }
        }
    }
}

fn azimuth(v: Vec3) -> f32 {
    v.z.atan2(-v.x)
}

fn inclination(v: Vec3) -> f32 {
    (-v.y).atan2((v.x * v.x + v.z * v.z).sqrt())
}

fn spherical_uvs(positions: &[Vec3]) -> Vec<Vec2> {
    let mut uvs: Vec<Vec2> = positions
        .iter()
        .map(|&p| Vec2::new(azimuth(p) / (2.0 * PI) + 0.5, 1.0 - (inclination(p) / PI + 0.5)))
        .collect();

    for (tri_pos, tri_uv) in positions.chunks_exact(3).zip(uvs.chunks_exact_mut(3)) {
        let centroid = (tri_pos[0] + tri_pos[1] + tri_pos[2]) / 3.0;
        let azi = azimuth(centroid);

        for (p, uv) in tri_pos.iter().zip(tri_uv.iter_mut()) {
            if azi < 0.0 && uv.x == 1.0 {
                uv.x -= 1.0;
            }
            // Poles have no azimuth of their own, borrow the face's
            if p.x == 0.0 && p.z == 0.0 {
                uv.x = azi / (2.0 * PI) + 0.5;
            }
        }

        // Faces straddling the seam get their low side wrapped past 1
        let max = tri_uv.iter().map(|uv| uv.x).fold(f32::MIN, f32::max);
        let min = tri_uv.iter().map(|uv| uv.x).fold(f32::MAX, f32::min);
        if max > 0.9 && min < 0.1 {
            for uv in tri_uv.iter_mut() {
                if uv.x < 0.2 {
                    uv.x += 1.0;
                }
            }
        }
    }

    uvs
}

/// Latitude/longitude sphere with pole fans, expanded to non-indexed form
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let width = width_segments.max(3) as usize;
    let height = height_segments.max(2) as usize;

    let mut grid = Vec::with_capacity(height + 1);
    let mut vertices = Vec::with_capacity((width + 1) * (height + 1));

    for iy in 0..=height {
        let v = iy as f32 / height as f32;
        let u_offset = match iy {
            0 => 0.5 / width as f32,
            _ if iy == height => -0.5 / width as f32,
            _ => 0.0,
        };

        let mut row = Vec::with_capacity(width + 1);
        for ix in 0..=width {
            let u = ix as f32 / width as f32;
            let (sin_theta, cos_theta) = (v * PI).sin_cos();
            let (sin_phi, cos_phi) = (u * 2.0 * PI).sin_cos();

            let position = Vec3::new(-radius * cos_phi * sin_theta, radius * cos_theta, radius * sin_phi * sin_theta);
            let normal = position.normalize_or_zero();

            row.push(vertices.len() as u32);
            vertices.push(Vertex::from_vectors(position, normal, Vec2::new(u + u_offset, 1.0 - v)));
        }
        grid.push(row);
    }

    let mut indices = Vec::with_capacity(width * height * 6);
    for iy in 0..height {
        for ix in 0..width {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];

            if iy != 0 {
                indices.extend([a, b, d]);
            }
            if iy != height - 1 {
                indices.extend([b, c, d]);
            }
        }
    }

    Mesh::from_indexed(&vertices, &indices).unwrap_or_default()
}

/// Unit sphere seen from the inside: the same triangles with reversed winding
pub fn inverted_sphere(width_segments: u32, height_segments: u32) -> Mesh {
    uv_sphere(1.0, width_segments, height_segments).flip_winding()
}
