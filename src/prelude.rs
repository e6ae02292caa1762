pub use crate::cli::{command, run_app};
pub use crate::domain::{
    CommitBase, CommitOutcome, Contact, ContactCollection, ContactEditor, ContactField,
    ContactStore, DEFAULT_STORAGE_KEY, EditParams, HomeScreen, SaveStatus,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, FileKvStore, KeyValueStore, MemKvStore, StorageMediums};
