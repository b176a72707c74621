use crate::bounds::Aabb;
use crate::error::MeshError;
use crate::{Vertex, VertexIndex};

/// An indexed triangle surface: vertex positions plus triangle index triples.
///
/// A mesh owns exactly one vertex sequence and one index sequence; it is built
/// once, handed by value to a renderer-facing consumer, and never mutated.
/// Both sequences are guaranteed non-empty, and the index sequence's length is
/// a multiple of 3.
///
/// Stored indices are *not* guaranteed to lie within the vertex sequence;
/// see [`check_indices`](Self::check_indices).
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<VertexIndex>,
}

impl Mesh {
    /// Construct a mesh, validating the structural invariants.
    ///
    /// # Errors
    ///
    /// * [`MeshError::NoVertices`] if `vertices` is empty
    /// * [`MeshError::NoTriangles`] if `indices` is empty
    /// * [`MeshError::TruncatedTriangle`] if `indices.len()` is not a multiple of 3
    pub fn new(vertices: Vec<Vertex>, indices: Vec<VertexIndex>) -> Result<Self, MeshError> {
        if vertices.is_empty() {
            return Err(MeshError::NoVertices);
        }
        if indices.is_empty() {
            return Err(MeshError::NoTriangles);
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::TruncatedTriangle(indices.len()));
        }
        Ok(Self::from_parts(vertices, indices))
    }

    /// Construct a mesh from sequences already known to satisfy the
    /// invariants of [`new`](Self::new).
    pub(crate) fn from_parts(vertices: Vec<Vertex>, indices: Vec<VertexIndex>) -> Self {
        debug_assert!(!vertices.is_empty());
        debug_assert!(!indices.is_empty());
        debug_assert!(indices.len() % 3 == 0);
        Self { vertices, indices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[VertexIndex] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over the index triples of each triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [VertexIndex; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Fetch the vertex positions of triangle `i`.
    ///
    /// Returns `None` if `i` is out of range or if the triangle references a
    /// vertex the mesh does not own.
    pub fn triangle(&self, i: usize) -> Option<[Vertex; 3]> {
        let tri = self.indices.chunks_exact(3).nth(i)?;
        Some([
            *self.vertices.get(tri[0] as usize)?,
            *self.vertices.get(tri[1] as usize)?,
            *self.vertices.get(tri[2] as usize)?,
        ])
    }

    /// Validate that every stored index references an owned vertex.
    ///
    /// The interchange parser deliberately performs no bounds validation, so a
    /// consumer that cannot tolerate dangling indices should call this at the
    /// hand-off boundary.
    ///
    /// # Errors
    ///
    /// * [`MeshError::IndexOutOfRange`] for the first dangling index found
    pub fn check_indices(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        match self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            None => Ok(()),
            Some(&index) => Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            }),
        }
    }

    /// The axis-aligned bounding box of the vertex sequence.
    pub fn bounds(&self) -> Aabb {
        // the vertex sequence is non-empty by construction
        Aabb::from_points(&self.vertices).unwrap_or(Aabb {
            mins: Vertex::origin(),
            maxs: Vertex::origin(),
        })
    }

    /// Transfer ownership of the underlying sequences to the caller.
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<VertexIndex>) {
        (self.vertices, self.indices)
    }
}
