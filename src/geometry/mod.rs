pub mod annotate;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod vertex;

pub use annotate::{annotate, annotate_vertices, triangle_centroid, Annotations, AttributeSet};
pub use error::{GeometryError, GeometryResult};
pub use mesh::Mesh;
pub use vertex::Vertex;
