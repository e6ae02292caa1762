use super::*;

use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;

pub const DEFAULT_STORAGE_DIR: &str = "./.instance";

/// Keeps every key in its own `<dir>/<key>.json` file.
pub struct FileKvStore {
    pub medium: String,
    pub dir: PathBuf,
}

impl FileKvStore {
    pub fn new(dir: &str) -> Self {
        let dir = if dir.trim().is_empty() {
            DEFAULT_STORAGE_DIR
        } else {
            dir
        };

        Self {
            medium: "file".to_string(),
            dir: PathBuf::from(dir),
        }
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;

        let mut file = match OpenOptions::new().read(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut data = String::new();
        file.read_to_string(&mut data)?;
        Ok(Some(data))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        create_file_parent(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        file.write_all(value.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_slot_is_persistent() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("nested").join("storage");
        let store = FileKvStore::new(nested.to_str().unwrap_or_default());

        assert_eq!(store.get_item("jsonData")?, None);

        store.set_item("jsonData", "[1,2,3]")?;
        assert_eq!(store.get_item("jsonData")?.as_deref(), Some("[1,2,3]"));

        // A second handle on the same directory sees the write
        let reopened = FileKvStore::new(nested.to_str().unwrap_or_default());
        assert_eq!(reopened.get_item("jsonData")?.as_deref(), Some("[1,2,3]"));

        store.set_item("jsonData", "[]")?;
        assert_eq!(store.get_item("jsonData")?.as_deref(), Some("[]"));

        store.remove_item("jsonData")?;
        assert_eq!(store.get_item("jsonData")?, None);

        // Removing an absent key is fine
        store.remove_item("jsonData")?;
        Ok(())
    }

    #[test]
    fn blank_dir_falls_back_to_default() {
        let store = FileKvStore::new("  ");

        assert_eq!(store.dir, PathBuf::from(DEFAULT_STORAGE_DIR));
    }

    #[test]
    fn rejects_path_like_keys() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = FileKvStore::new(dir.path().to_str().unwrap_or_default());

        assert!(matches!(
            store.set_item("../outside", "x"),
            Err(AppError::Validation(_))
        ));
        Ok(())
    }
}
