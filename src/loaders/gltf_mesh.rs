use anyhow::{bail, Context, Result};
use glam::{Mat4, Vec2, Vec3};
use std::path::Path;

use crate::geometry::mesh::face_normal;
use crate::geometry::{GeometryResult, Mesh, Vertex};
use crate::texture::TextureData;

/// Triangle geometry and first embedded image of a glTF file
pub struct GltfMesh {
    pub mesh: Mesh,
    pub texture: Option<TextureData>,
}

/// Loads every triangle primitive of a glTF file into one non-indexed mesh
pub fn load_gltf_mesh(path: impl AsRef<Path>) -> Result<GltfMesh> {
    let path = path.as_ref();
    let (document, buffers, images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    log::debug!(
        "glTF {:?}: {} scenes, {} meshes, {} images",
        path,
        document.scenes().count(),
        document.meshes().count(),
        images.len()
    );

    let mut mesh = Mesh::default();
    for scene in document.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, Mat4::IDENTITY, &mut mesh)?;
        }
    }

    if mesh.is_empty() {
        bail!("glTF file {:?} contains no triangles", path);
    }

    let texture = match images.first() {
        Some(image) => match image_to_rgba(image) {
            Ok(texture) => Some(texture),
            Err(e) => {
                log::warn!("Ignoring embedded image: {:#}", e);
                None
            }
        },
        None => None,
    };

    log::info!("Loaded {} triangles from {:?}", mesh.triangle_count(), path);
    Ok(GltfMesh { mesh, texture })
}

fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: Mat4,
    out: &mut Mesh,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "Skipping {:?} primitive in mesh {:?}",
                    primitive.mode(),
                    mesh.name()
                );
                continue;
            }
            let part = read_primitive(&primitive, buffers)
                .with_context(|| format!("Invalid primitive in mesh {:?}", mesh.name()))?;
            out.extend(part.transformed(global_transform));
        }
    }

    for child in node.children() {
        process_node(&child, buffers, global_transform, out)?;
    }

    Ok(())
}

fn read_primitive(primitive: &gltf::Primitive, buffers: &[gltf::buffer::Data]) -> Result<Mesh> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| &data[..]));

    let positions: Vec<Vec3> = reader
        .read_positions()
        .context("Mesh primitive has no positions")?
        .map(Vec3::from_array)
        .collect();

    let normals: Option<Vec<Vec3>> = reader
        .read_normals()
        .map(|normals| normals.map(Vec3::from_array).collect());

    let uvs: Vec<Vec2> = match reader.read_tex_coords(0) {
        Some(uvs) => uvs.into_f32().map(Vec2::from_array).collect(),
        None => vec![Vec2::ZERO; positions.len()],
    };

    let vertices: Vec<Vertex> = positions
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let n = normals.as_ref().and_then(|n| n.get(i).copied()).unwrap_or(Vec3::ZERO);
            let uv = uvs.get(i).copied().unwrap_or(Vec2::ZERO);
            Vertex::from_vectors(p, n, uv)
        })
        .collect();

    let mesh = match reader.read_indices() {
        Some(indices) => {
            let indices: Vec<u32> = indices.into_u32().collect();
            Mesh::from_indexed(&vertices, &indices)?
        }
        None => Mesh::new(vertices)?,
    };

    if normals.is_some() {
        Ok(mesh)
    } else {
        Ok(with_face_normals(mesh)?)
    }
}

/// Replace every vertex normal with its triangle's face normal
fn with_face_normals(mesh: Mesh) -> GeometryResult<Mesh> {
    let mut vertices = mesh.into_vertices();
    for tri in vertices.chunks_exact_mut(3) {
        let n = face_normal(tri[0].position(), tri[1].position(), tri[2].position());
        for v in tri.iter_mut() {
            v.normal = n.to_array();
        }
    }
    Mesh::new(vertices)
}

fn image_to_rgba(image: &gltf::image::Data) -> Result<TextureData> {
    use gltf::image::Format;

    let rgba = match image.format {
        Format::R8G8B8A8 => image.pixels.clone(),
        Format::R8G8B8 => image
            .pixels
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        Format::R8G8 => image
            .pixels
            .chunks_exact(2)
            .flat_map(|rg| [rg[0], rg[1], 0, 255])
            .collect(),
        Format::R8 => image.pixels.iter().flat_map(|&r| [r, r, r, 255]).collect(),
        other => bail!("Unsupported texture format {:?}", other),
    };

    // glTF addresses images top-down, so rows stay in stored order
    TextureData::from_rgba(image.width, image.height, rgba)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Write;

    // Two triangles sharing an edge with opposite windings, node translated +2 on Y
    pub(crate) const INDEXED_GLTF: &str = r#"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0, "translation": [0.0, 2.0, 0.0] }],
        "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 }, "indices": 1 }] }],
        "buffers": [{
            "byteLength": 48,
            "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAABAAIAAAACAAEA"
        }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
            { "buffer": 0, "byteOffset": 36, "byteLength": 12 }
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
              "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] },
            { "bufferView": 1, "componentType": 5123, "count": 6, "type": "SCALAR" }
        ]
    }"#;

    pub(crate) fn write_gltf(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".gltf").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }
}
