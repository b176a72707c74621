use crate::VertexIndex;

/// Errors related to [Mesh](crate::Mesh) construction and validation.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("Attempted to construct a mesh with no vertices")]
    NoVertices,
    #[error("Attempted to construct a mesh with no triangles")]
    NoTriangles,
    #[error("Triangle index list length is not a multiple of 3: {0}")]
    TruncatedTriangle(usize),
    #[error("Face references vertex {index}, but the mesh owns only {vertex_count} vertices")]
    IndexOutOfRange {
        index: VertexIndex,
        vertex_count: usize,
    },
}
