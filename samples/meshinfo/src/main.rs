//! Report vertex/triangle counts, bounds, and index validity of mesh
//! documents, either named directly or discovered in session directories.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use facet::{scan, Mesh};

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    cli::initialize_tracing(&args.log_filter, args.log_format);

    let mut failures = 0usize;
    for path in &args.paths {
        if path.is_dir() {
            match scan::load_all(path) {
                Ok(meshes) => {
                    if meshes.is_empty() {
                        tracing::warn!(dir = %path.display(), "no loadable documents found");
                    }
                    for loaded in &meshes {
                        report(&loaded.path, &loaded.mesh, args.check);
                    }
                }
                Err(e) => {
                    tracing::error!(dir = %path.display(), error = %e, "failed to scan directory");
                    failures += 1;
                }
            }
        } else {
            match scan::load(path) {
                Ok(mesh) => report(path, &mesh, args.check),
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "failed to load document");
                    failures += 1;
                }
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report(path: &Path, mesh: &Mesh, check: bool) {
    let extents = mesh.bounds().extents();
    println!(
        "{}: {} vertices, {} triangles, extents {:.3} x {:.3} x {:.3}",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        extents.x,
        extents.y,
        extents.z,
    );
    if check {
        if let Err(e) = mesh.check_indices() {
            tracing::warn!(path = %path.display(), error = %e, "mesh references missing vertices");
        }
    }
}
