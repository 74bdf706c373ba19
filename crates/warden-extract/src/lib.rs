//! Host-language import extraction.
//!
//! Each extractor walks a project tree, reads every source file for its
//! language, and reports the unquoted import paths it declares. This is the
//! only part of the system that looks at host-language syntax; the rest of
//! the workspace treats an [`ImportMap`] as opaque data.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod error;
mod go;
mod typescript;
mod walk;

pub use error::ExtractError;
use warden_analysis::ImportMap;
use warden_policy::Language;

use std::path::Path;

/// Extracts import edges for every source file of `language` under `root`.
///
/// The returned map's keys are canonical module paths: `import_base` joined
/// with each file's path relative to `root`.
pub fn extract(language: Language, root: &Path, import_base: &str) -> Result<ImportMap, ExtractError> {
    match language {
        Language::Go => go::extract(root, import_base),
        Language::TypeScript => typescript::extract(root, import_base),
    }
}
