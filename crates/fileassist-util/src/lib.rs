#![deny(clippy::print_stdout, clippy::print_stderr, clippy::unwrap_used)]

//! Contains various helpful utilities to be used throughout the fileassist project.

pub mod deserialize;
pub mod error;
pub mod file_util;

pub use error::FileError;

pub type JsonError = serde_path_to_error::Error<serde_json::Error>;
pub type TomlError = serde_path_to_error::Error<toml::de::Error>;
