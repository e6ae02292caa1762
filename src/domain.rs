pub mod collection;
pub mod contact;
pub mod editor;
pub mod home;
pub mod store;

pub use collection::{ContactCollection, SeedContact};
pub use contact::{Contact, ContactField};
pub use editor::{CommitBase, CommitOutcome, ContactEditor, EditParams, SaveStatus};
pub use home::HomeScreen;
pub use store::{ContactStore, DEFAULT_STORAGE_KEY};

use crate::errors::AppError;
use crate::storage::{KeyValueStore, validate_key};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, error, info, warn};
use uuid::Uuid;
