//! Staging file content and registering course resource modules.

use crate::{
    data::{
        CourseResource, FileArea, FileIdentity, ResourceRecord, StoredFile, RESOURCE_MODULE,
        ROOT_PATH,
    },
    error::AssistError,
    host::{CourseRegistry, FileStorage, ModuleDefaults},
    validate::ValidRequest,
};
use std::time::SystemTime;

/// Copies the file into a fresh draft area, registers a resource module
/// referencing the copy and disposes of the draft afterwards.
///
/// The module never references the requester's original file; it takes over
/// the staged copy's content, so the original stays usable and deletable on
/// its own. Nothing is registered if staging or the registry insert fails.
/// Failing to dispose of the draft afterwards is logged and swallowed since
/// the module is already valid at that point.
pub fn import_into(
    storage: &dyn FileStorage,
    registry: &dyn CourseRegistry,
    defaults: &dyn ModuleDefaults,
    file: &StoredFile,
    request: &ValidRequest,
) -> Result<CourseResource, AssistError> {
    let options = defaults
        .display_options(RESOURCE_MODULE)
        .ok_or_else(|| AssistError::MissingModuleDefaults(RESOURCE_MODULE.to_string()))?;

    let draft = FileIdentity {
        area: FileArea::new_draft(request.requester.id),
        path: ROOT_PATH.to_string(),
        name: request.display_name.clone(),
    };
    log::debug!("staging {} as {draft}", file.identity);
    let staged = storage
        .copy_file(file, draft)
        .map_err(|source| AssistError::Stage {
            name: file.identity.name.clone(),
            source,
        })?;

    let record = ResourceRecord {
        course_id: request.course_id,
        section_number: request.section_number,
        display_name: request.display_name.clone(),
        visible: true,
        visible_on_page: true,
        content: staged.identity.clone(),
        options,
    };
    log::debug!(
        "registering {} in course {} section {}",
        record.display_name,
        record.course_id,
        record.section_number
    );
    let id = match registry.create_resource_module(&record) {
        Ok(id) => id,
        Err(e) => {
            // the module was never created, so the draft is stale
            discard_draft(storage, &staged.identity);
            return Err(AssistError::Register(request.course_id, e));
        }
    };

    // the registry holds its own copy now
    discard_draft(storage, &staged.identity);

    Ok(CourseResource {
        id,
        course_id: request.course_id,
        section_number: request.section_number,
        display_name: request.display_name.clone(),
        created_at: SystemTime::now(),
    })
}

fn discard_draft(storage: &dyn FileStorage, staged: &FileIdentity) {
    if let Err(e) = storage.delete_file(staged) {
        log::warn!("failed to clean up draft copy {staged}: {e}");
    }
}
