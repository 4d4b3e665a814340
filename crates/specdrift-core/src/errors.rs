//! Error handling for specdrift-core
//!
//! The diff engine itself has no failure modes for well-shaped inputs; the
//! only errors owned by this crate are raised at the loader boundary, with
//! "document unreadable" and "document not a valid spec" kept as distinct
//! variants so callers can report them separately.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using SpecDriftError
pub type Result<T> = std::result::Result<T, SpecDriftError>;

/// Errors raised when loading a spec document from storage.
///
/// Loader errors must prevent invocation of the differ: no partial diff is
/// ever computed against a missing or unparseable document.
#[derive(Debug, Error)]
pub enum SpecDriftError {
    /// The spec file could not be read from disk
    #[error("failed to read spec file {}: {}", path.display(), source)]
    SpecUnreadable {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The spec file was read but is not valid JSON of the expected shape
    #[error("spec file {} is not a valid spec document: {}", path.display(), source)]
    SpecInvalidJson {
        /// Path of the file that failed to parse
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}
