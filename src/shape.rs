//! Procedural fallback primitives.
//!
//! A capture viewer displays a placeholder whenever a session produced no
//! usable document; these generators are its stand-ins. Every returned mesh
//! satisfies the full [Mesh](crate::Mesh) invariant set, index bounds
//! included.

use std::f32::consts::PI;

use nalgebra::{point, Vector3};

use crate::{Mesh, Vertex, VertexIndex};

/// An axis-aligned cuboid with the given edge lengths, centered on the
/// origin. 8 shared vertices, 12 triangles, outward-facing winding.
pub fn cuboid(extents: Vector3<f32>) -> Mesh {
    let h = extents / 2.0;
    let vertices: Vec<Vertex> = vec![
        point![-h.x, -h.y, -h.z],
        point![h.x, -h.y, -h.z],
        point![h.x, h.y, -h.z],
        point![-h.x, h.y, -h.z],
        point![-h.x, -h.y, h.z],
        point![h.x, -h.y, h.z],
        point![h.x, h.y, h.z],
        point![-h.x, h.y, h.z],
    ];
    let indices: Vec<VertexIndex> = vec![
        4, 5, 6, 6, 7, 4, // front
        1, 0, 3, 3, 2, 1, // back
        0, 4, 7, 7, 3, 0, // left
        5, 1, 2, 2, 6, 5, // right
        3, 7, 6, 6, 2, 3, // top
        0, 1, 5, 5, 4, 0, // bottom
    ];
    Mesh::from_parts(vertices, indices)
}

/// A latitude/longitude sphere of the given radius, centered on the origin.
///
/// `segments` counts both the latitude bands and the longitude slices, and is
/// clamped to a minimum of 3.
pub fn uv_sphere(radius: f32, segments: u32) -> Mesh {
    let segments = segments.max(3);
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<VertexIndex> = Vec::new();

    for lat in 0..=segments {
        let theta = lat as f32 * PI / segments as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for lon in 0..=segments {
            let phi = lon as f32 * 2.0 * PI / segments as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            vertices.push(point![
                radius * sin_theta * cos_phi,
                radius * cos_theta,
                radius * sin_theta * sin_phi
            ]);
        }
    }

    for lat in 0..segments {
        for lon in 0..segments {
            let current = lat * (segments + 1) + lon;
            let next = current + segments + 1;
            indices.extend([current, current + 1, next]);
            indices.extend([current + 1, next + 1, next]);
        }
    }

    Mesh::from_parts(vertices, indices)
}
