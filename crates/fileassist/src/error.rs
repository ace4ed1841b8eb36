//! Contains the main error type for fileassist.

use crate::data::{Capability, CourseId, Scope};
use fileassist_util::{FileError, TomlError};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type of the library.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("File name cannot be empty")]
    MissingFileName,
    #[error("File name {0} contains a path separator")]
    FileNameWithSeparator(String),
    #[error("File path {0} contains invalid components")]
    InvalidFilePath(String),
    #[error("Course id must be positive")]
    InvalidCourseId,
    #[error("Section number must be positive")]
    InvalidSectionNumber,

    #[error("Missing capability {capability} in {scope}")]
    MissingCapability {
        capability: Capability,
        scope: Scope,
    },

    #[error("No file named {name} at {path} in the requester's private files")]
    FileNotFound { path: String, name: String },

    #[error("No display options configured for module type {0}")]
    MissingModuleDefaults(String),
    #[error("Failed to stage {name} into a draft area")]
    Stage {
        name: String,
        #[source]
        source: StorageError,
    },
    #[error("Failed to register the resource module in course {0}")]
    Register(CourseId, #[source] RegistryError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Error from a file storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File identity cannot be resolved: {0}")]
    InvalidIdentity(String),
    #[error(transparent)]
    File(#[from] FileError),
}

/// Error from a course registry collaborator.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Course {0} not found")]
    CourseNotFound(CourseId),
    #[error("Course {course} has no section {section}")]
    SectionNotFound { course: CourseId, section: u32 },
    #[error("Invalid course configuration at {0}")]
    InvalidConfig(PathBuf, #[source] TomlError),
    #[error("Cannot read the staged content for the module")]
    Content(#[source] StorageError),
    #[error(transparent)]
    File(#[from] FileError),
}
