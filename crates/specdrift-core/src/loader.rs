//! Spec document loader.
//!
//! Reads a spec document from a JSON file. Failures here are the only error
//! surface of the core crate; see [`crate::errors`] for the taxonomy.

use crate::errors::{Result, SpecDriftError};
use crate::model::SpecDocument;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a spec document from a JSON file.
///
/// Missing optional keys (`paths`, `response`, `schema`) default to empty
/// mappings; a well-formed but minimal document such as `{}` loads
/// successfully as an empty spec.
///
/// # Errors
///
/// - [`SpecDriftError::SpecUnreadable`] - the file could not be read
/// - [`SpecDriftError::SpecInvalidJson`] - the file is not valid JSON, or
///   its shape contradicts the spec format (e.g. `paths` is not an object)
pub fn load_spec(path: impl AsRef<Path>) -> Result<SpecDocument> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| SpecDriftError::SpecUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let spec: SpecDocument =
        serde_json::from_str(&text).map_err(|source| SpecDriftError::SpecInvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        paths = spec.paths.len(),
        "loaded spec document"
    );

    Ok(spec)
}
