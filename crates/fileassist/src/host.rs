//! Contains the traits the host platform provides to the import operations.
//!
//! The platform's file storage, permission system, course registry and module
//! configuration are all reached through these narrow seams. Implementations
//! must be thread-safe; the operations hold no state between calls, so hosts
//! are free to serve concurrent requests with a single instance.

use crate::{
    data::{
        Capability, DisplayOptions, FileIdentity, ResourceId, ResourceRecord, Scope, StoredFile,
        UserId,
    },
    error::{RegistryError, StorageError},
};

/// File storage scopes on the host platform.
pub trait FileStorage {
    /// Lists every file in the given user's private file area.
    ///
    /// Directories are not included. No ordering is guaranteed; when several
    /// files share a (path, name) pair the iteration order decides which one
    /// an import picks up.
    fn list_private_files(&self, owner: UserId) -> Result<Vec<StoredFile>, StorageError>;

    /// Copies the content of `file` under the target identity and returns the copy.
    fn copy_file(
        &self,
        file: &StoredFile,
        target: FileIdentity,
    ) -> Result<StoredFile, StorageError>;

    /// Removes the file with the given identity.
    ///
    /// Removing a draft identity disposes of the whole draft area.
    fn delete_file(&self, identity: &FileIdentity) -> Result<(), StorageError>;
}

/// Capability lookups on the host platform.
pub trait Authorization {
    /// Whether the subject holds the capability within the scope.
    fn has_capability(&self, subject: UserId, capability: Capability, scope: Scope) -> bool;
}

/// The host platform's course module registry.
pub trait CourseRegistry {
    /// Persists a new resource module and returns its id.
    ///
    /// The registry takes over the content of `record.content`; the staged
    /// copy may be deleted once this returns. Atomicity of the insert is the
    /// host's responsibility.
    fn create_resource_module(&self, record: &ResourceRecord) -> Result<ResourceId, RegistryError>;
}

/// The host platform's default settings for new modules.
pub trait ModuleDefaults {
    /// The display options for the given module type, or `None` if the host
    /// has no configuration for it.
    fn display_options(&self, module_type: &str) -> Option<DisplayOptions>;
}
