use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::library::is_audio_file;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("no such file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("unsupported file type: {}", .0.display())]
    Unsupported(PathBuf),
}

/// Check that `path` names an existing file with an accepted extension.
pub fn validate_locator(path: &Path, extensions: &[String]) -> Result<PathBuf, SelectError> {
    if !path.exists() {
        return Err(SelectError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(SelectError::NotAFile(path.to_path_buf()));
    }
    if !is_audio_file(path, extensions) {
        return Err(SelectError::Unsupported(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}
