//! Mesh invariants, bounding boxes, and the procedural fallback primitives.

use facet::bounds::Aabb;
use facet::error::MeshError;
use facet::{shape, Mesh, Vertex};
use nalgebra::{point, vector};

fn triangle_vertices() -> Vec<Vertex> {
    vec![
        point![0.0, 0.0, 0.0],
        point![1.0, 0.0, 0.0],
        point![0.0, 1.0, 0.0],
    ]
}

/// A mesh with an empty vertex or index sequence must not be constructible.
#[test]
fn rejects_empty_sequences() {
    assert!(matches!(
        Mesh::new(Vec::new(), vec![0, 1, 2]),
        Err(MeshError::NoVertices)
    ));
    assert!(matches!(
        Mesh::new(triangle_vertices(), Vec::new()),
        Err(MeshError::NoTriangles)
    ));
}

#[test]
fn rejects_truncated_triangles() {
    assert!(matches!(
        Mesh::new(triangle_vertices(), vec![0, 1]),
        Err(MeshError::TruncatedTriangle(2))
    ));
}

#[test]
fn accessors() {
    let mesh = Mesh::new(triangle_vertices(), vec![0, 1, 2]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    assert_eq!(
        mesh.triangle(0),
        Some([
            point![0.0, 0.0, 0.0],
            point![1.0, 0.0, 0.0],
            point![0.0, 1.0, 0.0]
        ])
    );
    assert_eq!(mesh.triangle(1), None);
}

/// Construction does not validate index bounds; `check_indices` does.
#[test]
fn check_indices_reports_first_dangling_index() {
    let mesh = Mesh::new(triangle_vertices(), vec![0, 5, 2]).unwrap();
    assert!(matches!(
        mesh.check_indices(),
        Err(MeshError::IndexOutOfRange {
            index: 5,
            vertex_count: 3,
        })
    ));
    assert_eq!(mesh.triangle(0), None);
}

#[test]
fn bounds_of_known_mesh() {
    let mesh = Mesh::new(triangle_vertices(), vec![0, 1, 2]).unwrap();
    let bounds = mesh.bounds();
    assert_eq!(bounds.mins, point![0.0, 0.0, 0.0]);
    assert_eq!(bounds.maxs, point![1.0, 1.0, 0.0]);
    assert_eq!(bounds.extents(), vector![1.0, 1.0, 0.0]);
}

#[test]
fn into_parts_transfers_ownership() {
    let mesh = Mesh::new(triangle_vertices(), vec![0, 1, 2]).unwrap();
    let (vertices, indices) = mesh.into_parts();
    assert_eq!(vertices.len(), 3);
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn aabb_from_points() {
    assert_eq!(Aabb::from_points(&[]), None);
    let aabb = Aabb::from_points(&[point![1.0, -2.0, 0.5], point![-1.0, 3.0, 0.0]]).unwrap();
    assert_eq!(aabb.mins, point![-1.0, -2.0, 0.0]);
    assert_eq!(aabb.maxs, point![1.0, 3.0, 0.5]);
    assert_eq!(aabb.center(), point![0.0, 0.5, 0.25]);
    assert!(aabb.contains(&point![0.0, 0.0, 0.0]));
    assert!(!aabb.contains(&point![0.0, 4.0, 0.0]));
}

#[test]
fn cuboid_shape() {
    let mesh = shape::cuboid(vector![2.0, 4.0, 6.0]);
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.check_indices().is_ok());
    let bounds = mesh.bounds();
    assert_eq!(bounds.extents(), vector![2.0, 4.0, 6.0]);
    assert_eq!(bounds.center(), point![0.0, 0.0, 0.0]);
}

#[test]
fn uv_sphere_shape() {
    let mesh = shape::uv_sphere(2.0, 8);
    assert!(mesh.check_indices().is_ok());
    for v in mesh.vertices() {
        let r = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
        assert!((r - 2.0).abs() < 1e-4, "vertex off the sphere: {v:?}");
    }
    let bounds = mesh.bounds();
    assert!(bounds.contains(&point![0.0, 0.0, 0.0]));
}

/// Degenerate segment counts are clamped rather than producing an invalid mesh.
#[test]
fn uv_sphere_clamps_segments() {
    let mesh = shape::uv_sphere(1.0, 0);
    assert!(mesh.check_indices().is_ok());
    assert!(mesh.triangle_count() > 0);
}
