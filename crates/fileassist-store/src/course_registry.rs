//! The per-course module registry backed by `course_config.toml` files.

use crate::campus::Campus;
use fileassist::{
    host::CourseRegistry, CourseId, DisplayOptions, RegistryError, ResourceId, ResourceRecord,
};
use fileassist_util::{deserialize, file_util};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const COURSE_CONFIG_FILE_NAME: &str = "course_config.toml";

/// A course's configuration file.
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseConfig {
    pub name: String,
    /// Number of sections on the course page. Resources go into `1..=sections`.
    pub sections: u32,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceEntry>,
}

/// One resource module on a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub id: ResourceId,
    pub section: u32,
    pub name: String,
    /// Path of the content copy, relative to the course directory.
    pub file: String,
    pub visible: bool,
    pub options: DisplayOptions,
}

/// [`CourseRegistry`] over per-course directories under the campus root.
///
/// Module creation is load-modify-save on the course's config file; there is
/// no cross-process locking, so concurrent creates against the same course
/// can race. Retried requests create duplicate modules by design.
#[derive(Debug, Clone)]
pub struct DirCourseRegistry {
    campus: Campus,
}

impl DirCourseRegistry {
    pub fn new(campus: Campus) -> Self {
        Self { campus }
    }

    fn config_path(&self, course: CourseId) -> PathBuf {
        self.campus.course_dir(course).join(COURSE_CONFIG_FILE_NAME)
    }

    /// Reads a course's configuration. A course without a config file does
    /// not exist as far as the registry is concerned.
    pub fn load_config(&self, course: CourseId) -> Result<CourseConfig, RegistryError> {
        let path = self.config_path(course);
        if !path.exists() {
            return Err(RegistryError::CourseNotFound(course));
        }
        log::debug!("reading course config at {}", path.display());
        let data = file_util::read_file_to_string(&path)?;
        deserialize::toml_from_str(&data).map_err(|e| RegistryError::InvalidConfig(path, e))
    }

    fn save_config(&self, course: CourseId, config: &CourseConfig) -> Result<(), RegistryError> {
        let toml = toml::to_string_pretty(config).expect("this should never fail");
        file_util::write_to_file(toml, self.config_path(course))?;
        Ok(())
    }
}

impl CourseRegistry for DirCourseRegistry {
    fn create_resource_module(&self, record: &ResourceRecord) -> Result<ResourceId, RegistryError> {
        let course = record.course_id;
        let mut config = self.load_config(course)?;
        if record.section_number > config.sections {
            return Err(RegistryError::SectionNotFound {
                course,
                section: record.section_number,
            });
        }

        let id = config
            .resources
            .iter()
            .map(|resource| resource.id)
            .max()
            .unwrap_or(0)
            + 1;

        // take over the staged content before anything becomes visible
        let content_source = self
            .campus
            .resolve(&record.content)
            .map_err(RegistryError::Content)?;
        let file = format!("files/{id}_{}", file_name_stub(&record.display_name));
        let target = self.campus.course_dir(course).join(&file);
        file_util::copy_file(&content_source, &target)?;

        config.resources.push(ResourceEntry {
            id,
            section: record.section_number,
            name: record.display_name.clone(),
            file,
            visible: record.visible,
            options: record.options.clone(),
        });
        self.save_config(course, &config)?;
        log::debug!("created resource {id} in course {course}");
        Ok(id)
    }
}

// display names come from user input and may contain separators
fn file_name_stub(display_name: &str) -> String {
    display_name.replace('/', "_").replace('\\', "_")
}
