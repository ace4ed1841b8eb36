#![deny(clippy::print_stdout, clippy::print_stderr, clippy::unwrap_used)]

//! The main fileassist library. Copies files from a user's private file area
//! into course sections as resource modules, on top of a host platform that
//! provides storage, permissions, the course registry and module defaults
//! through the traits in [`host`].

mod data;
mod error;
pub mod host;
mod import;
mod locate;
mod report;
mod validate;

pub use crate::{
    data::{
        Capability, CourseId, CourseResource, DisplayOptions, FileArea, FileIdentity,
        ImportOutcome, ImportRequest, Requester, ResourceId, ResourceRecord, Scope, StoredFile,
        UserId, RESOURCE_MODULE, ROOT_PATH,
    },
    error::{AssistError, RegistryError, StorageError},
    import::import_into,
    locate::find_private_file,
    report::confirmation,
    validate::{validate, ValidRequest},
};
use crate::host::{Authorization, CourseRegistry, FileStorage, ModuleDefaults};
pub use fileassist_util::file_util;

/// Copies a file from the requester's private file area into a course section
/// as a new resource module and returns the created resource together with a
/// confirmation message.
///
/// The request is validated and authorized before anything is touched, the
/// source file is resolved by its logical path and name, and the content is
/// handed to the course registry through a transient draft copy. The
/// operation is not idempotent: repeating a successful request creates a
/// second resource.
///
/// # Errors
/// Malformed fields, a missing capability, an unknown source file, and any
/// staging or registry failure all surface as [`AssistError`]; no resource
/// exists unless the whole operation succeeded.
pub fn create_file_resource(
    storage: &dyn FileStorage,
    authorization: &dyn Authorization,
    registry: &dyn CourseRegistry,
    defaults: &dyn ModuleDefaults,
    request: ImportRequest,
) -> Result<ImportOutcome, AssistError> {
    log::debug!(
        "user {} importing {:?} from {:?} into course {} section {}",
        request.requester.id,
        request.file_name,
        request.file_path,
        request.course_id,
        request.section_number
    );

    let request = validate(authorization, request)?;
    let file = find_private_file(
        storage,
        request.requester.id,
        &request.file_path,
        &request.file_name,
    )?;
    let resource = import_into(storage, registry, defaults, &file, &request)?;
    let message = confirmation(&request, &resource);
    log::debug!("{message}");
    Ok(ImportOutcome { resource, message })
}
