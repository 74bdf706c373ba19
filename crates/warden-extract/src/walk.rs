//! Shared project-walking helpers used by every language extractor.

use std::path::Path;
use std::path::PathBuf;

use crate::ExtractError;

/// Returns every file under `root` with the given extension (without the
/// leading dot), sorted for deterministic iteration order.
pub(crate) fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, ExtractError> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.map_err(|source| ExtractError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Joins an import base and a file's path relative to the project root into
/// a canonical, `/`-separated module key, mirroring how host-language module
/// paths are conventionally written regardless of host OS path separators.
pub(crate) fn module_key(root: &Path, file: &Path, import_base: &str) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut components = Vec::new();
    for part in relative.components() {
        if let Some(s) = part.as_os_str().to_str() {
            components.push(s);
        }
    }
    let relative = components.join("/");
    if import_base.is_empty() {
        relative
    } else {
        format!("{import_base}/{relative}")
    }
}
