//! File storage over the campus directory layout.

use crate::campus::Campus;
use fileassist::{
    host::FileStorage, FileArea, FileIdentity, StorageError, StoredFile, UserId,
};
use fileassist_util::{file_util, FileError};
use std::{path::Path, time::SystemTime};
use walkdir::WalkDir;

/// [`FileStorage`] over plain directories under the campus root.
///
/// Private areas are ordinary directory trees, so files can be dropped in
/// with any tool; drafts are per-copy directories that are disposed of
/// whole.
#[derive(Debug, Clone)]
pub struct DirFileStore {
    campus: Campus,
}

impl DirFileStore {
    pub fn new(campus: Campus) -> Self {
        Self { campus }
    }
}

impl FileStorage for DirFileStore {
    fn list_private_files(&self, owner: UserId) -> Result<Vec<StoredFile>, StorageError> {
        let private_root = self.campus.private_dir(owner);
        if !private_root.is_dir() {
            // a user that has never stored anything simply has no files
            return Ok(vec![]);
        }

        let mut files = vec![];
        for entry in WalkDir::new(&private_root).min_depth(1) {
            let entry = entry.map_err(FileError::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry
                .file_name()
                .to_str()
                .ok_or_else(|| FileError::NoFileName(entry.path().to_path_buf()))?
                .to_string();
            let relative_dir = entry
                .path()
                .parent()
                .unwrap_or(&private_root)
                .strip_prefix(&private_root)
                .expect("entries are inside the walked root");
            let mut path = String::from("/");
            for component in relative_dir.components() {
                let component = component
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| FileError::NoFileName(entry.path().to_path_buf()))?;
                path.push_str(component);
                path.push('/');
            }

            let metadata = entry.metadata().map_err(FileError::from)?;
            files.push(StoredFile {
                identity: FileIdentity {
                    area: FileArea::Private(owner),
                    path,
                    name: name.clone(),
                },
                size: metadata.len(),
                mimetype: guess_mimetype(&name),
                created: created_at(&metadata),
            });
        }
        log::trace!("listed {} files for user {owner}", files.len());
        Ok(files)
    }

    fn copy_file(
        &self,
        file: &StoredFile,
        target: FileIdentity,
    ) -> Result<StoredFile, StorageError> {
        let source_path = self.campus.resolve(&file.identity)?;
        let target_path = self.campus.resolve(&target)?;
        file_util::copy_file(&source_path, &target_path)?;

        let metadata = file_util::metadata(&target_path)?;
        Ok(StoredFile {
            identity: target,
            size: metadata.len(),
            mimetype: guess_mimetype(&file.identity.name),
            created: created_at(&metadata),
        })
    }

    fn delete_file(&self, identity: &FileIdentity) -> Result<(), StorageError> {
        match &identity.area {
            FileArea::Draft { owner, draft_id } => {
                // a draft directory only ever holds the one copy
                let draft_dir = self.campus.draft_dir(*owner, draft_id);
                file_util::remove_dir_all(&draft_dir)?;
            }
            FileArea::Private(_) => {
                let path = self.campus.resolve(identity)?;
                file_util::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

fn guess_mimetype(name: &str) -> Option<String> {
    mime_guess::from_path(Path::new(name))
        .first_raw()
        .map(str::to_string)
}

fn created_at(metadata: &std::fs::Metadata) -> SystemTime {
    // creation time is not available on every filesystem
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;

    fn init() {
        use log::*;
        use simple_logger::*;
        let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();
    }

    fn campus_with_files() -> (tempfile::TempDir, Campus) {
        let temp = tempfile::tempdir().unwrap();
        let private = temp.path().join("users/5/private");
        std::fs::create_dir_all(private.join("assignment")).unwrap();
        std::fs::write(private.join("basepic.jpg"), "Test file 0").unwrap();
        std::fs::write(private.join("assignment/infolder.jpg"), "Test file 1").unwrap();
        let campus = Campus::open(temp.path()).unwrap();
        (temp, campus)
    }

    #[test]
    fn lists_files_with_logical_paths() {
        init();
        let (_temp, campus) = campus_with_files();
        let store = DirFileStore::new(campus);

        let mut files = store.list_private_files(5).unwrap();
        files.sort_by(|a, b| a.identity.name.cmp(&b.identity.name));

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].identity.path, "/");
        assert_eq!(files[0].identity.name, "basepic.jpg");
        assert_eq!(files[0].size, 11);
        assert_eq!(files[0].mimetype.as_deref(), Some("image/jpeg"));
        assert_eq!(files[1].identity.path, "/assignment/");
        assert_eq!(files[1].identity.name, "infolder.jpg");
    }

    #[test]
    fn listing_skips_directories() {
        init();
        let (_temp, campus) = campus_with_files();
        let store = DirFileStore::new(campus);

        let files = store.list_private_files(5).unwrap();
        assert!(files.iter().all(|f| f.identity.name != "assignment"));
    }

    #[test]
    fn unknown_users_have_no_files() {
        init();
        let (_temp, campus) = campus_with_files();
        let store = DirFileStore::new(campus);

        assert!(store.list_private_files(99).unwrap().is_empty());
    }

    #[test]
    fn copies_into_a_draft_and_disposes_of_it() {
        init();
        let (temp, campus) = campus_with_files();
        let store = DirFileStore::new(campus);

        let source = store
            .list_private_files(5)
            .unwrap()
            .into_iter()
            .find(|f| f.identity.name == "basepic.jpg")
            .unwrap();
        let draft = FileIdentity {
            area: FileArea::new_draft(5),
            path: "/".to_string(),
            name: "picture1.jpg".to_string(),
        };

        let staged = store.copy_file(&source, draft).unwrap();
        assert_eq!(staged.size, source.size);
        let FileArea::Draft { draft_id, .. } = &staged.identity.area else {
            panic!("staged into the wrong area");
        };
        let draft_dir = temp.path().join(format!("users/5/draft/{draft_id}"));
        assert!(draft_dir.join("picture1.jpg").is_file());

        store.delete_file(&staged.identity).unwrap();
        assert!(!draft_dir.exists());
        // the original is untouched
        assert!(temp.path().join("users/5/private/basepic.jpg").is_file());
    }
}
