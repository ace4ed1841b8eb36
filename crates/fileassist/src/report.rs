//! Formats confirmations for completed imports.

use crate::{data::CourseResource, validate::ValidRequest};

/// Builds the confirmation message for a completed import.
///
/// Names the source file and path, the requester, the target course and
/// section, the resource's display name and its new id. Failures are never
/// formatted here; errors pass through to the caller untouched.
pub fn confirmation(request: &ValidRequest, resource: &CourseResource) -> String {
    format!(
        "Added {path}{file} from {who}'s private files to course {course} section {section} as \"{display}\" (resource {id}).",
        path = request.file_path,
        file = request.file_name,
        who = request.requester.display_name,
        course = resource.course_id,
        section = resource.section_number,
        display = resource.display_name,
        id = resource.id,
    )
}
