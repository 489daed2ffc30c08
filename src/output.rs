use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, PreviewResult};

/// Where the page goes when no output path is given, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "preview-theme.html";

/// Makes the output path absolute, falling back to [`DEFAULT_OUTPUT_FILE`]
pub fn resolve_output_path(path: Option<&Path>) -> PreviewResult<PathBuf> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_FILE));
    Ok(std::path::absolute(path)?)
}

/// Writes the page, creating missing directories. An existing file is replaced.
pub fn write_page(path: &Path, html: &str) -> PreviewResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, html).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
