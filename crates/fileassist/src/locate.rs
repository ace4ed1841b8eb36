//! Finding files in a user's private file area.

use crate::{
    data::{StoredFile, UserId},
    error::AssistError,
    host::FileStorage,
};

/// Finds the file with the given logical path and name in the owner's private
/// file area.
///
/// The listing contains files only, so a directory can never match. When the
/// storage holds more than one file for the same (path, name) pair the first
/// one in storage iteration order wins.
pub fn find_private_file(
    storage: &dyn FileStorage,
    owner: UserId,
    path: &str,
    name: &str,
) -> Result<StoredFile, AssistError> {
    log::debug!("looking for {path}{name} in user {owner}'s private files");
    let files = storage.list_private_files(owner)?;
    log::trace!("user {owner} has {} private files", files.len());
    files
        .into_iter()
        .find(|file| file.identity.path == path && file.identity.name == name)
        .ok_or_else(|| AssistError::FileNotFound {
            path: path.to_string(),
            name: name.to_string(),
        })
}
