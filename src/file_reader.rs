use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a whole text file into a `String`.
///
/// Lines are joined with `\n` regardless of the terminator used in the file, and the final
/// line gets no trailing newline.
pub fn read_whole_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "read file");
    Ok(raw.lines().collect::<Vec<_>>().join("\n"))
}
