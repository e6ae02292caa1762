use super::*;

use std::cell::RefCell;
use std::collections::HashMap;

/// Process-local slots; nothing survives the process.
#[derive(Default)]
pub struct MemKvStore {
    data: RefCell<HashMap<String, String>>,
}

impl MemKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
