//! Discovery and batch loading of mesh documents from a capture session's
//! output directory.
//!
//! A capture session leaves its reconstructed documents in a single flat
//! directory; this module lists the loadable ones, loads them tolerantly
//! (one bad document never aborts a batch), and clears a session directory
//! when the user restarts a scan.

use std::fs;
use std::path::{Path, PathBuf};

use crate::de;
use crate::Mesh;

/// Errors related to session-directory operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to remove {path}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to loading a single mesh document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("No loader for {0}")]
    Unsupported(PathBuf),
    #[error(transparent)]
    Obj(#[from] de::obj::Error),
}

/// Storage formats recognized by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Obj,
}

impl Format {
    /// Determine the format of `path` from its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "obj" => Some(Self::Obj),
            _ => None,
        }
    }
}

/// A mesh loaded from disk, tagged with its source path.
#[derive(Debug)]
pub struct LoadedMesh {
    pub path: PathBuf,
    pub mesh: Mesh,
}

/// Load a single mesh document, dispatching on its extension.
///
/// # Errors
///
/// * [`LoadError::Unsupported`] if the extension names no known format
/// * [`LoadError::Obj`] if the document fails to load
pub fn load(path: &Path) -> Result<Mesh, LoadError> {
    match Format::from_path(path) {
        Some(Format::Obj) => Ok(de::obj::load(path)?),
        None => Err(LoadError::Unsupported(path.to_owned())),
    }
}

/// List the loadable mesh documents within `dir`, sorted by file name.
///
/// Hidden files and files of unrecognized formats are skipped.
///
/// # Errors
///
/// * [`Error::ReadDir`] if `dir` cannot be enumerated
pub fn mesh_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = fs::read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_owned(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && !is_hidden(path))
        .filter(|path| Format::from_path(path).is_some())
        .collect();
    files.sort();
    Ok(files)
}

/// Load every recognized mesh document within `dir`.
///
/// Documents that fail to load are skipped rather than aborting the batch.
///
/// # Errors
///
/// * [`Error::ReadDir`] if `dir` cannot be enumerated
pub fn load_all(dir: &Path) -> Result<Vec<LoadedMesh>, Error> {
    let mut meshes = Vec::new();
    for path in mesh_files(dir)? {
        match load(&path) {
            Ok(mesh) => meshes.push(LoadedMesh { path, mesh }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unloadable document");
            }
        }
    }
    tracing::debug!(dir = %dir.display(), loaded = meshes.len(), "scanned session directory");
    Ok(meshes)
}

/// Delete every non-hidden regular file in a session directory, returning the
/// number removed.
///
/// A missing directory is not an error: there is nothing to clear.
///
/// # Errors
///
/// * [`Error::ReadDir`] if an extant `dir` cannot be enumerated
/// * [`Error::Remove`] if a file cannot be deleted
pub fn clear_session(dir: &Path) -> Result<usize, Error> {
    if !dir.exists() {
        return Ok(0);
    }
    let entries = fs::read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_owned(),
        source,
    })?;
    let mut removed = 0;
    for path in entries.filter_map(Result::ok).map(|entry| entry.path()) {
        if !path.is_file() || is_hidden(&path) {
            continue;
        }
        fs::remove_file(&path).map_err(|source| Error::Remove {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "removed session file");
        removed += 1;
    }
    Ok(removed)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
