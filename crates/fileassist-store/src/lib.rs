#![deny(clippy::print_stdout, clippy::print_stderr, clippy::unwrap_used)]

//! Directory-backed implementations of the fileassist host traits.
//!
//! A campus root directory stands in for the host platform: user file areas
//! live under `users/`, each course keeps a `course_config.toml` and its
//! content copies under `courses/`, and `settings.toml` at the root holds
//! capability grants and module defaults. This is enough to run imports
//! end to end without a live platform; concurrent writers against the same
//! root are not synchronized beyond what the filesystem provides.

mod campus;
mod course_registry;
mod error;
mod file_store;
mod settings;

pub use crate::{
    campus::{Campus, SETTINGS_FILE_NAME},
    course_registry::{CourseConfig, DirCourseRegistry, ResourceEntry, COURSE_CONFIG_FILE_NAME},
    error::StoreError,
    file_store::DirFileStore,
    settings::{CampusSettings, Grant},
};
