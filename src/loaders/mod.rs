pub mod gltf_mesh;

pub use gltf_mesh::{load_gltf_mesh, GltfMesh};
