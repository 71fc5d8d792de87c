/// Errors raised while building or annotating triangle geometry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// Non-indexed geometry whose vertex count is not a multiple of 3
    #[error("vertex count {count} is not a whole number of triangles ({remainder} trailing vertices)")]
    IncompleteTriangle { count: usize, remainder: usize },

    /// Index buffer whose length is not a multiple of 3
    #[error("index count {count} is not a whole number of triangles")]
    IncompleteIndexedTriangle { count: usize },

    /// Index pointing past the end of the vertex array
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Check that `count` vertices form whole triangles
pub fn check_triangle_count(count: usize) -> GeometryResult<()> {
    match count % 3 {
        0 => Ok(()),
        remainder => Err(GeometryError::IncompleteTriangle { count, remainder }),
    }
}
