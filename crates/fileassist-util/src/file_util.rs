//! Various utility functions, primarily wrapping the standard library's IO and filesystem functions

use crate::error::FileError;
use std::{
    fs::{self, File, Metadata},
    io::{Read, Write},
    path::Path,
};

pub fn open_file(path: impl AsRef<Path>) -> Result<File, FileError> {
    let path = path.as_ref();
    File::open(path).map_err(|e| FileError::FileOpen(path.to_path_buf(), e))
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FileError> {
    let path = path.as_ref();
    let mut file = open_file(path)?;
    let mut bytes = vec![];
    file.read_to_end(&mut bytes)
        .map_err(|e| FileError::FileRead(path.to_path_buf(), e))?;
    Ok(bytes)
}

pub fn read_file_to_string<P: AsRef<Path>>(path: P) -> Result<String, FileError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| FileError::FileRead(path.to_path_buf(), e))?;
    Ok(s)
}

/// Note: creates all intermediary directories if needed.
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<File, FileError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            create_dir_all(parent)?;
        }
    }
    File::create(path).map_err(|e| FileError::FileCreate(path.to_path_buf(), e))
}

pub fn write_to_file<S: AsRef<[u8]>, P: AsRef<Path>>(
    source: S,
    target: P,
) -> Result<File, FileError> {
    let target = target.as_ref();
    let mut target_file = create_file(target)?;
    target_file
        .write_all(source.as_ref())
        .map_err(|e| FileError::FileWrite(target.to_path_buf(), e))?;
    Ok(target_file)
}

pub fn metadata<P: AsRef<Path>>(path: P) -> Result<Metadata, FileError> {
    let path = path.as_ref();
    fs::metadata(path).map_err(|e| FileError::FileMetadata(path.to_path_buf(), e))
}

pub fn remove_file<P: AsRef<Path>>(path: P) -> Result<(), FileError> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|e| FileError::FileRemove(path.to_path_buf(), e))
}

pub fn remove_dir_all<P: AsRef<Path>>(path: P) -> Result<(), FileError> {
    fs::remove_dir_all(&path).map_err(|e| FileError::DirRemove(path.as_ref().to_path_buf(), e))
}

pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<(), FileError> {
    fs::create_dir_all(&path).map_err(|e| FileError::DirCreate(path.as_ref().to_path_buf(), e))
}

/// Copies the file at source to the target path, creating intermediary
/// directories as needed. The target is the copy's full path, not a directory.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, target: Q) -> Result<(), FileError> {
    let source = source.as_ref();
    let target = target.as_ref();

    if target.is_dir() {
        return Err(FileError::UnexpectedFile(target.to_path_buf()));
    }
    log::trace!("copying file {} -> {}", source.display(), target.display());
    if let Some(parent) = target.parent() {
        if !parent.exists() {
            create_dir_all(parent)?;
        }
    }
    std::fs::copy(source, target).map_err(|e| FileError::FileCopy {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
