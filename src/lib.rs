//! Indexed triangle meshes for capture pipelines: a lenient Wavefront-style
//! interchange parser plus the helpers a scan-session viewer needs around it.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod bounds;
pub mod de;
pub mod error;
mod mesh;
pub mod scan;
pub mod shape;

pub use mesh::*;

use nalgebra::Point3;

/// Index type of vertices within a mesh.
pub type VertexIndex = u32;

/// Position of a single vertex.
pub type Vertex = Point3<f32>;
