//! Contains the error type for opening and reading a campus root.

use fileassist_util::{FileError, TomlError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No campus root directory at {0}")]
    MissingRoot(PathBuf),
    #[error("Invalid campus settings at {0}")]
    InvalidSettings(PathBuf, #[source] TomlError),
    #[error(transparent)]
    File(#[from] FileError),
}
