use super::*;

use std::fs;
use std::path::Path;

pub const DEFAULT_STORAGE_KEY: &str = "jsonData";

/// Persists the whole [`ContactCollection`] as one JSON array under a single key.
///
/// Built once at startup and lent to both screens. Writes replace the
/// previous value wholesale; there is no locking or versioning, so the last
/// `save` wins.
pub struct ContactStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl ContactStore {
    pub fn new(backend: Box<dyn KeyValueStore>, key: &str) -> Result<Self, AppError> {
        validate_key(key)?;

        Ok(Self {
            backend,
            key: key.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn medium(&self) -> &str {
        self.backend.get_medium()
    }

    /// Reads the collection. A slot that was never written is an empty
    /// collection; anything unreadable or malformed is `StorageRead`.
    pub fn load(&self) -> Result<ContactCollection, AppError> {
        let stored = self
            .backend
            .get_item(&self.key)
            .map_err(|e| AppError::read_failure(&self.key, e))?;

        let data = match stored {
            Some(data) if !data.trim().is_empty() => data,
            _ => {
                debug!(key = %self.key, "no stored contacts, starting empty");
                return Ok(ContactCollection::new());
            }
        };

        let contacts: ContactCollection =
            serde_json::from_str(&data).map_err(|e| AppError::read_failure(&self.key, e))?;

        debug!(key = %self.key, count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    /// [`ContactStore::load`] that reports failures to the log and hands back
    /// `fallback` instead.
    pub fn load_or(&self, fallback: ContactCollection) -> ContactCollection {
        match self.load() {
            Ok(contacts) => contacts,
            Err(e) => {
                error!(key = %self.key, error = %e, "error loading data");
                fallback
            }
        }
    }

    pub fn save(&self, contacts: &ContactCollection) -> Result<(), AppError> {
        let data =
            serde_json::to_string(contacts).map_err(|e| AppError::write_failure(&self.key, e))?;

        self.backend
            .set_item(&self.key, &data)
            .map_err(|e| AppError::write_failure(&self.key, e))?;

        info!(key = %self.key, count = contacts.len(), "data saved successfully");
        Ok(())
    }

    /// Drops the stored value. The only way out of a malformed slot.
    pub fn clear(&self) -> Result<(), AppError> {
        self.backend
            .remove_item(&self.key)
            .map_err(|e| AppError::write_failure(&self.key, e))?;

        info!(key = %self.key, "cleared stored contacts");
        Ok(())
    }

    /// Replaces the stored collection with the contents of a JSON fixture file.
    pub fn seed_from_file(&self, path: &Path) -> Result<ContactCollection, AppError> {
        let data = fs::read_to_string(path)?;
        let seed: Vec<SeedContact> = serde_json::from_str(&data)?;
        let contacts = ContactCollection::from_seed(seed)?;

        self.save(&contacts)?;
        Ok(contacts)
    }
}
