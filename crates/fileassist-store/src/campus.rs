//! The campus root directory and its layout.

use crate::error::StoreError;
use fileassist::{CourseId, FileArea, FileIdentity, StorageError, UserId};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Handle to a campus root directory.
///
/// The root contains `settings.toml`, one directory per user under `users/`
/// (with `private/` and `draft/` areas inside) and one directory per course
/// under `courses/`.
#[derive(Debug, Clone)]
pub struct Campus {
    root: PathBuf,
}

impl Campus {
    /// Opens an existing campus root directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::MissingRoot(root));
        }
        log::debug!("using campus root at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE_NAME)
    }

    pub fn private_dir(&self, owner: UserId) -> PathBuf {
        self.root
            .join("users")
            .join(owner.to_string())
            .join("private")
    }

    pub fn draft_dir(&self, owner: UserId, draft_id: &Uuid) -> PathBuf {
        self.root
            .join("users")
            .join(owner.to_string())
            .join("draft")
            .join(draft_id.to_string())
    }

    pub fn course_dir(&self, course: CourseId) -> PathBuf {
        self.root.join("courses").join(course.to_string())
    }

    /// Resolves a file identity to its path on disk.
    ///
    /// Identities built by the import operations are already normalized, but
    /// resolution is reachable with hand-built ones too, so escapes from the
    /// area directory are rejected here as well.
    pub fn resolve(&self, identity: &FileIdentity) -> Result<PathBuf, StorageError> {
        let area_dir = match &identity.area {
            FileArea::Private(owner) => self.private_dir(*owner),
            FileArea::Draft { owner, draft_id } => self.draft_dir(*owner, draft_id),
        };
        let relative = identity.path.trim_matches('/');
        if identity.name.contains('/')
            || identity.name.contains('\\')
            || relative.contains('\\')
            || relative.split('/').any(|c| c == ".." || c == ".")
        {
            return Err(StorageError::InvalidIdentity(identity.to_string()));
        }
        let mut path = area_dir;
        if !relative.is_empty() {
            path = path.join(relative);
        }
        Ok(path.join(&identity.name))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;

    fn campus() -> (tempfile::TempDir, Campus) {
        let temp = tempfile::tempdir().unwrap();
        let campus = Campus::open(temp.path()).unwrap();
        (temp, campus)
    }

    #[test]
    fn refuses_a_missing_root() {
        let temp = tempfile::tempdir().unwrap();
        let res = Campus::open(temp.path().join("nowhere"));
        assert!(matches!(res, Err(StoreError::MissingRoot(_))));
    }

    #[test]
    fn resolves_private_identities() {
        let (_temp, campus) = campus();
        let identity = FileIdentity {
            area: FileArea::Private(5),
            path: "/assignment/".to_string(),
            name: "infolder.jpg".to_string(),
        };
        let path = campus.resolve(&identity).unwrap();
        assert_eq!(
            path,
            campus.root().join("users/5/private/assignment/infolder.jpg")
        );
    }

    #[test]
    fn resolves_root_paths_without_an_empty_component() {
        let (_temp, campus) = campus();
        let identity = FileIdentity {
            area: FileArea::Private(5),
            path: "/".to_string(),
            name: "basepic.jpg".to_string(),
        };
        let path = campus.resolve(&identity).unwrap();
        assert_eq!(path, campus.root().join("users/5/private/basepic.jpg"));
    }

    #[test]
    fn rejects_escaping_identities() {
        let (_temp, campus) = campus();
        let identity = FileIdentity {
            area: FileArea::Private(5),
            path: "/../6/private/".to_string(),
            name: "stolen.jpg".to_string(),
        };
        assert!(matches!(
            campus.resolve(&identity),
            Err(StorageError::InvalidIdentity(_))
        ));
    }
}
