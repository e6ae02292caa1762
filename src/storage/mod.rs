pub mod file;
pub mod memory;

use crate::prelude::AppError;
use regex::Regex;
use std::fs;
use std::path::Path;

pub use file::FileKvStore;
pub use memory::MemKvStore;

/// String slots addressed by key. A slot that was never written reads as `None`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn remove_item(&self, key: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    File,
    /// Lives only as long as the process. Meant for library callers and tests.
    Mem,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "file" => Ok(StorageMediums::File),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(format!(
                "'{}' is not a recognized storage medium (file, mem)",
                str
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    storage_dir: &str,
) -> Result<Box<dyn KeyValueStore>, AppError> {
    match medium {
        StorageMediums::File => Ok(Box::new(FileKvStore::new(storage_dir))),
        StorageMediums::Mem => Ok(Box::new(MemKvStore::new())),
    }
}

/// Keys become file names, so only a conservative character set is allowed.
pub fn validate_key(key: &str) -> Result<(), AppError> {
    let re = Regex::new(r"^[A-Za-z0-9_.\-]+$")?;

    if key == "." || key == ".." || !re.is_match(key) {
        return Err(AppError::Validation(format!(
            "Storage key '{}' may only contain letters, digits, '_', '-' and '.'",
            key
        )));
    }
    Ok(())
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storage_mediums() -> Result<(), AppError> {
        assert_eq!(StorageMediums::from("file")?, StorageMediums::File);
        assert_eq!(StorageMediums::from(" MEM ")?, StorageMediums::Mem);
        assert!(StorageMediums::from("txt").is_err());
        Ok(())
    }

    #[test]
    fn key_validation() {
        assert!(validate_key("jsonData").is_ok());
        assert!(validate_key("contacts.v1-backup_2").is_ok());

        assert!(validate_key("").is_err());
        assert!(validate_key("..").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("with space").is_err());
    }
}
