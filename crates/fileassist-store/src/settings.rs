//! Campus settings: capability grants and module defaults.

use crate::{campus::Campus, error::StoreError};
use fileassist::{
    host::{Authorization, ModuleDefaults},
    Capability, CourseId, DisplayOptions, Scope, UserId,
};
use fileassist_util::{deserialize, file_util};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The campus `settings.toml`.
///
/// Implements both the authorization and the module-defaults host traits, so
/// one loaded settings value can serve a whole import.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CampusSettings {
    /// Display options per module type, e.g. `[modules.resource]`.
    #[serde(default)]
    pub modules: HashMap<String, DisplayOptions>,
    /// Capability grants, e.g. `[[grants]]`.
    #[serde(default)]
    pub grants: Vec<Grant>,
}

/// A capability granted to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grant {
    pub user: UserId,
    pub capability: Capability,
    /// The course the grant applies to. User-scoped capabilities leave this out.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseId>,
}

impl CampusSettings {
    /// Reads the settings file at the campus root.
    pub fn load(campus: &Campus) -> Result<Self, StoreError> {
        let path = campus.settings_file();
        log::debug!("loading campus settings at {}", path.display());
        let data = file_util::read_file_to_string(&path)?;
        deserialize::toml_from_str(&data).map_err(|e| StoreError::InvalidSettings(path, e))
    }
}

impl Authorization for CampusSettings {
    fn has_capability(&self, subject: UserId, capability: Capability, scope: Scope) -> bool {
        self.grants.iter().any(|grant| {
            grant.user == subject
                && grant.capability == capability
                && match scope {
                    // user-scoped capabilities only ever apply to one's own area
                    Scope::User(user) => grant.course.is_none() && user == subject,
                    Scope::Course(course) => grant.course == Some(course),
                }
        })
    }
}

impl ModuleDefaults for CampusSettings {
    fn display_options(&self, module_type: &str) -> Option<DisplayOptions> {
        self.modules.get(module_type).cloned()
    }
}
