//! Error handling for patch selection and application

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when selecting or applying patches
#[derive(Debug, Error)]
pub enum PatchError {
    /// An I/O error occurred while seeking or writing the target
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The target file could not be opened for reading and writing
    #[error("Failed to open '{path}': {source}")]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Replacement code does not fit in the space it is meant to fill
    #[error("Longer than padded length: {len} > {length}")]
    PaddingOverflow {
        /// Length of the replacement code
        len: usize,
        /// Length of the space available
        length: usize,
    },

    /// Both an enable list and a disable list were given
    #[error("Patches cannot be enabled and disabled at the same time")]
    ConflictingSelection,

    /// Selection names that match no catalog entry (strict mode only)
    #[error("Unknown patch name(s): {}", names.join(", "))]
    UnknownPatch {
        /// The names that did not match
        names: Vec<String>,
    },
}

/// Type alias for Results from patch operations
pub type Result<T> = std::result::Result<T, PatchError>;
