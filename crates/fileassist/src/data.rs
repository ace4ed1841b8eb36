//! Types passed between the import operations and the host platform.

use serde::{Deserialize, Serialize};
use std::{fmt, time::SystemTime};
use uuid::Uuid;

/// Identifies a user on the host platform.
pub type UserId = u32;
/// Identifies a course on the host platform.
pub type CourseId = u32;
/// Identifies a resource module created on the host platform.
pub type ResourceId = u32;

/// The module type imported files are registered under.
pub const RESOURCE_MODULE: &str = "resource";

/// The logical root of a file area.
pub const ROOT_PATH: &str = "/";

/// The user making an import request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requester {
    pub id: UserId,
    /// Embedded in the confirmation message.
    pub display_name: String,
}

/// A request to copy a private file into a course section as a resource module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    pub requester: Requester,
    /// Name of the source file in the requester's private file area.
    pub file_name: String,
    /// Logical directory of the source file. Missing or empty means the root.
    pub file_path: Option<String>,
    pub course_id: CourseId,
    pub section_number: u32,
    /// Name for the created resource. Missing or empty means the file name.
    pub display_name: Option<String>,
}

/// The storage scope a file lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileArea {
    /// A user's permanent private file area.
    Private(UserId),
    /// A transient per-user staging area used to hand content over to the course registry.
    Draft { owner: UserId, draft_id: Uuid },
}

impl FileArea {
    /// Creates a fresh draft area scope for the given user.
    pub fn new_draft(owner: UserId) -> Self {
        Self::Draft {
            owner,
            draft_id: Uuid::new_v4(),
        }
    }
}

impl fmt::Display for FileArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private(owner) => write!(f, "user {owner} private area"),
            Self::Draft { owner, draft_id } => write!(f, "user {owner} draft area {draft_id}"),
        }
    }
}

/// Identifies a file within a storage scope.
///
/// `path` is a logical directory with leading and trailing separators,
/// e.g. `/` or `/assignment/`. The pair (path, name) is unique only within
/// one area, never globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIdentity {
    pub area: FileArea,
    pub path: String,
    pub name: String,
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} in {}", self.path, self.name, self.area)
    }
}

/// Metadata of a stored file. The content bytes stay with the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub identity: FileIdentity,
    pub size: u64,
    pub mimetype: Option<String>,
    pub created: SystemTime,
}

/// Display options applied to a new resource module.
///
/// These come from the host's configuration for the module type and are
/// passed through to the registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub display: u32,
    pub popup_width: u32,
    pub popup_height: u32,
    pub print_intro: bool,
    pub show_size: bool,
    pub show_type: bool,
    pub show_date: bool,
    pub filter_files: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            display: 0,
            popup_width: 620,
            popup_height: 450,
            print_intro: true,
            show_size: false,
            show_type: false,
            show_date: false,
            filter_files: 0,
        }
    }
}

/// Everything the course registry needs to persist a new resource module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub course_id: CourseId,
    pub section_number: u32,
    pub display_name: String,
    pub visible: bool,
    pub visible_on_page: bool,
    /// The staged copy whose content the module takes over.
    pub content: FileIdentity,
    pub options: DisplayOptions,
}

/// A course resource module created by a successful import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResource {
    pub id: ResourceId,
    pub course_id: CourseId,
    pub section_number: u32,
    pub display_name: String,
    pub created_at: SystemTime,
}

/// The result of a completed import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub resource: CourseResource,
    /// Human-readable confirmation.
    pub message: String,
}

/// A permission the requester must hold in some scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    /// View the files in one's own private file area.
    #[serde(rename = "user/files:view")]
    ViewOwnFiles,
    /// Manage the activities of a course.
    #[serde(rename = "course/activities:manage")]
    ManageCourseActivities,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewOwnFiles => write!(f, "user/files:view"),
            Self::ManageCourseActivities => write!(f, "course/activities:manage"),
        }
    }
}

/// The scope a capability check applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    User(UserId),
    Course(CourseId),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user {id}"),
            Self::Course(id) => write!(f, "course {id}"),
        }
    }
}
