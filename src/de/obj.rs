//! Deserialization of Wavefront-style `.obj` documents as [Meshes](crate::Mesh).
//!
//! # Notes
//!
//! * Only vertex positions (`v`) and triangular faces (`f`) are consulted;
//!   every other directive (normals, texture coordinates, groups, materials,
//!   comments) is skipped.
//! * Parsing is deliberately lenient, carried over from the capture pipeline
//!   this format support was built for:
//!   * a vertex field that fails to parse as a number recovers as `0.0`
//!     rather than failing the line or the document;
//!   * a face line without three usable references emits nothing;
//!   * face references past the third are never consumed (no fan
//!     triangulation of polygons).
//! * Face references are 1-based in the text and stored 0-based. Referenced
//!   indices are *not* checked against the vertex count here; consumers that
//!   need that guarantee call [`Mesh::check_indices`](crate::Mesh::check_indices)
//!   at the hand-off boundary.
//!
//! # See Also
//!
//! * [Wavefront OBJ format notes](http://paulbourke.net/dataformats/obj/)

use std::path::{Path, PathBuf};

use crate::{Mesh, Vertex, VertexIndex};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document declared no usable vertices or no usable faces.
    #[error("Document contains no usable geometry")]
    NoGeometry,
    #[error("Failed to read document from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a single interchange document into a [Mesh].
///
/// Line endings and leading/trailing whitespace are insignificant. The parse
/// is a single pass with no state carried between lines.
///
/// # Errors
///
/// * [`Error::NoGeometry`] if no vertices or no triangles were extracted
pub fn parse(text: &str) -> Result<Mesh, Error> {
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<VertexIndex> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if let Some(fields) = line.strip_prefix("v ") {
            let mut fields = fields.split_whitespace();
            if let (Some(x), Some(y), Some(z)) = (fields.next(), fields.next(), fields.next()) {
                vertices.push(Vertex::new(
                    lenient_f32(x),
                    lenient_f32(y),
                    lenient_f32(z),
                ));
            }
        } else if let Some(fields) = line.strip_prefix("f ") {
            let mut refs = fields.split_whitespace().map(face_vertex_index);
            match (refs.next(), refs.next(), refs.next()) {
                (Some(Some(a)), Some(Some(b)), Some(Some(c))) => {
                    indices.extend([a, b, c]);
                }
                _ => {
                    tracing::trace!(line, "face line without three usable references; skipping");
                }
            }
        }
    }

    if vertices.is_empty() || indices.is_empty() {
        return Err(Error::NoGeometry);
    }
    tracing::debug!(
        vertices = vertices.len(),
        triangles = indices.len() / 3,
        "parsed interchange document"
    );
    Ok(Mesh::from_parts(vertices, indices))
}

/// Read the document at `path` and [parse] it.
///
/// # Errors
///
/// * [`Error::Io`] if the file cannot be read as UTF-8 text
/// * [`Error::NoGeometry`] as for [parse]
pub fn load(path: impl AsRef<Path>) -> Result<Mesh, Error> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading interchange document");
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    parse(&text)
}

/// Numeric recovery policy: a field that fails to parse is `0.0`, and the
/// line it appears in is otherwise unaffected.
#[inline]
fn lenient_f32(field: &str) -> f32 {
    field.parse().unwrap_or(0.0)
}

/// Resolve a face-vertex reference (`12`, `12/4`, `12//7`, `12/4/7`) to a
/// zero-based position index.
///
/// Only the first `/`-separated sub-field is consulted. A reference of `0` is
/// unusable: the format's indices are 1-based.
fn face_vertex_index(field: &str) -> Option<VertexIndex> {
    let position = field.split('/').next()?;
    position.parse::<VertexIndex>().ok()?.checked_sub(1)
}
