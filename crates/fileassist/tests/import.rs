//! Tests the full import operation against an in-memory host.

use fileassist::{
    host::{Authorization, CourseRegistry, FileStorage, ModuleDefaults},
    AssistError, Capability, DisplayOptions, FileArea, FileIdentity, ImportRequest, RegistryError,
    Requester, ResourceId, ResourceRecord, Scope, StorageError, StoredFile,
};
use std::{sync::Mutex, time::SystemTime};

struct InMemoryHost {
    files: Mutex<Vec<StoredFile>>,
    grants: Vec<(Capability, Scope)>,
    defaults: Option<DisplayOptions>,
    modules: Mutex<Vec<(ResourceId, ResourceRecord)>>,
}

impl InMemoryHost {
    fn new() -> Self {
        Self {
            files: Mutex::new(vec![]),
            grants: vec![
                (Capability::ViewOwnFiles, Scope::User(5)),
                (Capability::ManageCourseActivities, Scope::Course(5)),
            ],
            defaults: Some(DisplayOptions::default()),
            modules: Mutex::new(vec![]),
        }
    }

    fn with_private_file(self, owner: u32, path: &str, name: &str) -> Self {
        self.files.lock().unwrap().push(StoredFile {
            identity: FileIdentity {
                area: FileArea::Private(owner),
                path: path.to_string(),
                name: name.to_string(),
            },
            size: 11,
            mimetype: Some("image/jpeg".to_string()),
            created: SystemTime::UNIX_EPOCH,
        });
        self
    }

    fn module_names(&self) -> Vec<String> {
        self.modules
            .lock()
            .unwrap()
            .iter()
            .map(|(_, record)| record.display_name.clone())
            .collect()
    }
}

impl FileStorage for InMemoryHost {
    fn list_private_files(&self, owner: u32) -> Result<Vec<StoredFile>, StorageError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.identity.area == FileArea::Private(owner))
            .cloned()
            .collect())
    }

    fn copy_file(
        &self,
        file: &StoredFile,
        target: FileIdentity,
    ) -> Result<StoredFile, StorageError> {
        let copy = StoredFile {
            identity: target,
            ..file.clone()
        };
        self.files.lock().unwrap().push(copy.clone());
        Ok(copy)
    }

    fn delete_file(&self, identity: &FileIdentity) -> Result<(), StorageError> {
        let mut files = self.files.lock().unwrap();
        let before = files.len();
        files.retain(|f| f.identity != *identity);
        if files.len() == before {
            return Err(StorageError::InvalidIdentity(identity.to_string()));
        }
        Ok(())
    }
}

impl Authorization for InMemoryHost {
    fn has_capability(&self, _subject: u32, capability: Capability, scope: Scope) -> bool {
        self.grants.contains(&(capability, scope))
    }
}

impl CourseRegistry for InMemoryHost {
    fn create_resource_module(&self, record: &ResourceRecord) -> Result<ResourceId, RegistryError> {
        if record.course_id != 5 {
            return Err(RegistryError::CourseNotFound(record.course_id));
        }
        let mut modules = self.modules.lock().unwrap();
        let id = modules.len() as ResourceId + 1;
        modules.push((id, record.clone()));
        Ok(id)
    }
}

impl ModuleDefaults for InMemoryHost {
    fn display_options(&self, _module_type: &str) -> Option<DisplayOptions> {
        self.defaults.clone()
    }
}

fn request() -> ImportRequest {
    ImportRequest {
        requester: Requester {
            id: 5,
            display_name: "Nina".to_string(),
        },
        file_name: "basepic.jpg".to_string(),
        file_path: Some("/".to_string()),
        course_id: 5,
        section_number: 1,
        display_name: Some("picture1.jpg".to_string()),
    }
}

fn import(
    host: &InMemoryHost,
    request: ImportRequest,
) -> Result<fileassist::ImportOutcome, AssistError> {
    fileassist::create_file_resource(host, host, host, host, request)
}

#[test]
fn creates_one_resource_with_the_requested_name() {
    let host = InMemoryHost::new().with_private_file(5, "/", "basepic.jpg");

    let outcome = import(&host, request()).unwrap();
    assert_eq!(host.module_names(), ["picture1.jpg"]);
    assert_eq!(outcome.resource.course_id, 5);
    assert_eq!(outcome.resource.section_number, 1);
    assert!(outcome.message.contains("course 5"));
    assert!(outcome.message.contains(&format!(
        "resource {}",
        outcome.resource.id
    )));
}

#[test]
fn display_name_defaults_to_the_file_name() {
    let host = InMemoryHost::new().with_private_file(5, "/", "basepic.jpg");

    let mut req = request();
    req.display_name = None;
    let outcome = import(&host, req).unwrap();
    assert_eq!(outcome.resource.display_name, "basepic.jpg");
    assert_eq!(host.module_names(), ["basepic.jpg"]);
}

#[test]
fn finds_files_in_subdirectories() {
    let host = InMemoryHost::new().with_private_file(5, "/assignment/", "infolder.jpg");

    let mut req = request();
    req.file_name = "infolder.jpg".to_string();
    req.file_path = Some("/assignment/".to_string());
    req.display_name = Some("picture2.jpg".to_string());
    let outcome = import(&host, req).unwrap();
    assert!(outcome.message.contains("/assignment/infolder.jpg"));
}

#[test]
fn unknown_files_create_nothing() {
    let host = InMemoryHost::new().with_private_file(5, "/", "basepic.jpg");

    let mut req = request();
    req.file_name = "infolder.jpg".to_string();
    req.file_path = Some("/assignment/".to_string());
    let err = import(&host, req).unwrap_err();
    assert!(matches!(err, AssistError::FileNotFound { .. }));
    assert!(host.module_names().is_empty());
}

#[test]
fn missing_capabilities_create_nothing_even_for_existing_files() {
    let mut host = InMemoryHost::new().with_private_file(5, "/", "basepic.jpg");
    host.grants = vec![(Capability::ViewOwnFiles, Scope::User(5))];

    let err = import(&host, request()).unwrap_err();
    assert!(matches!(err, AssistError::MissingCapability { .. }));
    assert!(host.module_names().is_empty());
    // nothing was staged either
    assert_eq!(host.files.lock().unwrap().len(), 1);
}

#[test]
fn repeating_a_request_creates_a_second_resource() {
    let host = InMemoryHost::new().with_private_file(5, "/", "basepic.jpg");

    let first = import(&host, request()).unwrap();
    let second = import(&host, request()).unwrap();
    assert_ne!(first.resource.id, second.resource.id);
    assert_eq!(host.module_names(), ["picture1.jpg", "picture1.jpg"]);
}

#[test]
fn the_original_file_survives_the_import() {
    let host = InMemoryHost::new().with_private_file(5, "/", "basepic.jpg");

    import(&host, request()).unwrap();
    let files = host.files.lock().unwrap();
    // the private file is still there and the draft copy is gone
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].identity.area, FileArea::Private(5));
    assert_eq!(files[0].identity.name, "basepic.jpg");
}

#[test]
fn registry_failures_leave_no_draft_behind() {
    let mut host = InMemoryHost::new().with_private_file(5, "/", "basepic.jpg");
    // the registry only knows course 5
    host.grants
        .push((Capability::ManageCourseActivities, Scope::Course(6)));

    let mut req = request();
    req.course_id = 6;
    let err = import(&host, req).unwrap_err();
    assert!(matches!(err, AssistError::Register(6, _)));
    let files = host.files.lock().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].identity.area, FileArea::Private(5));
}
