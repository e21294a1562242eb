//! Thin filesystem helpers that attach the offending path to I/O errors.

use std::fs;
use std::path::Path;

use crate::errors::{Result, SitecheckError};

/// Names of the entries directly inside `dir`, in directory order.
///
/// Names that are not valid UTF-8 are converted lossily; they can never
/// match an ASCII extension filter anyway.
pub(crate) fn read_entry_names(dir: &Path) -> Result<Vec<String>> {
    let list_err = |source| SitecheckError::ListDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Read a whole file as raw bytes.
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| SitecheckError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole file as text, replacing invalid UTF-8 sequences.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Returns `true` if anything exists at `path`, following symlinks.
#[must_use]
pub(crate) fn exists(path: &Path) -> bool {
    path.metadata().is_ok()
}
