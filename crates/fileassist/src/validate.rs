//! Request shape checks and authorization.

use crate::{
    data::{Capability, CourseId, ImportRequest, Requester, Scope, ROOT_PATH},
    error::AssistError,
    host::Authorization,
};

/// An import request that has passed the shape checks, with defaults filled in.
#[derive(Debug, Clone)]
pub struct ValidRequest {
    pub requester: Requester,
    pub file_name: String,
    /// Normalized with leading and trailing separators.
    pub file_path: String,
    pub course_id: CourseId,
    pub section_number: u32,
    pub display_name: String,
}

/// Checks the request's shape, normalizes the file path and fills in the
/// display name, then checks the requester's capabilities.
///
/// Has no side effects; a request that fails here has touched neither the
/// file storage nor the course registry.
pub fn validate(
    authorization: &dyn Authorization,
    request: ImportRequest,
) -> Result<ValidRequest, AssistError> {
    let request = check_request(request)?;
    authorize(authorization, &request)?;
    Ok(request)
}

/// The shape half of validation: field checks and normalization.
pub fn check_request(request: ImportRequest) -> Result<ValidRequest, AssistError> {
    let file_name = request.file_name.trim().to_string();
    if file_name.is_empty() {
        return Err(AssistError::MissingFileName);
    }
    if file_name.contains('/') || file_name.contains('\\') {
        return Err(AssistError::FileNameWithSeparator(file_name));
    }
    if request.course_id == 0 {
        return Err(AssistError::InvalidCourseId);
    }
    if request.section_number == 0 {
        return Err(AssistError::InvalidSectionNumber);
    }

    let file_path = normalize_path(request.file_path.as_deref().unwrap_or_default())?;
    let display_name = match request.display_name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => file_name.clone(),
    };

    Ok(ValidRequest {
        requester: request.requester,
        file_name,
        file_path,
        course_id: request.course_id,
        section_number: request.section_number,
        display_name,
    })
}

/// The capability half of validation. Fails with the missing capability named.
pub fn authorize(
    authorization: &dyn Authorization,
    request: &ValidRequest,
) -> Result<(), AssistError> {
    let checks = [
        (Capability::ViewOwnFiles, Scope::User(request.requester.id)),
        (
            Capability::ManageCourseActivities,
            Scope::Course(request.course_id),
        ),
    ];
    for (capability, scope) in checks {
        log::trace!(
            "checking {capability} in {scope} for user {}",
            request.requester.id
        );
        if !authorization.has_capability(request.requester.id, capability, scope) {
            return Err(AssistError::MissingCapability { capability, scope });
        }
    }
    Ok(())
}

/// Normalizes a logical file path: empty means the root, and leading and
/// trailing separators are enforced, so `assignment` becomes `/assignment/`.
fn normalize_path(path: &str) -> Result<String, AssistError> {
    let path = path.trim();
    if path.is_empty() || path == ROOT_PATH {
        return Ok(ROOT_PATH.to_string());
    }
    if path.contains('\\') {
        return Err(AssistError::InvalidFilePath(path.to_string()));
    }
    if path.split('/').any(|c| c == "." || c == "..") {
        return Err(AssistError::InvalidFilePath(path.to_string()));
    }

    let mut normalized = String::with_capacity(path.len() + 2);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    if !path.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
