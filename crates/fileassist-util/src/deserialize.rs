//! Utility functions for deserializing data wrapped with serde_path_to_error for better errors.

use crate::{JsonError, TomlError};
use serde::de::DeserializeOwned;

pub fn json_from_str<T: DeserializeOwned>(s: &str) -> Result<T, JsonError> {
    let de = &mut serde_json::Deserializer::from_str(s);
    serde_path_to_error::deserialize(de)
}

pub fn toml_from_str<T: DeserializeOwned>(s: &str) -> Result<T, TomlError> {
    let de = &mut toml::de::Deserializer::new(s);
    serde_path_to_error::deserialize(de)
}
