//! Errors surfaced while walking a project tree and reading source files.

use std::path::PathBuf;

/// An error encountered while extracting imports from a project.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Failed to walk the project root.
    #[error("failed to walk `{root}`")]
    Walk {
        /// The root that was being walked.
        root: PathBuf,
        /// The underlying error.
        #[source]
        source: walkdir::Error,
    },

    /// Failed to read a source file.
    #[error("failed to read `{path}`")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}
