use std::io;
use std::path::PathBuf;

use htl_parser::ParseError;
use thiserror::Error;

/// Error type for resource loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a file.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A transformer rejected the file contents.
    #[error("failed to transform '{}': {source}", path.display())]
    Transform {
        /// The file being transformed.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: ParseError,
    },
    /// Failed to walk a static directory.
    #[error("failed to walk static directory: {0}")]
    Walk(#[from] walkdir::Error),
}
