use super::*;

/// Invoked with the committed collection so the list can refresh without
/// another storage read.
pub type RefreshCallback<'a> = Box<dyn FnMut(&ContactCollection) + 'a>;

/// Everything the list screen hands over when it opens the editor.
pub struct EditParams<'a> {
    pub contact: Contact,
    pub on_refresh: RefreshCallback<'a>,
}

impl<'a> EditParams<'a> {
    pub fn new(contact: Contact, on_refresh: impl FnMut(&ContactCollection) + 'a) -> Self {
        Self {
            contact,
            on_refresh: Box::new(on_refresh),
        }
    }
}

/// Which collection a commit substitutes the working copy into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommitBase {
    /// Re-read the store right before substituting.
    #[default]
    Reload,
    /// Use the collection captured when the editor was opened. Any write
    /// that landed in between is overwritten by the commit.
    Snapshot(ContactCollection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Failed,
}

/// `contacts` is `None` when no collection could be built to save.
#[derive(Debug)]
pub struct CommitOutcome {
    pub contacts: Option<ContactCollection>,
    pub status: SaveStatus,
}

pub struct ContactEditor<'a> {
    working: Contact,
    base: CommitBase,
    on_refresh: RefreshCallback<'a>,
}

impl<'a> ContactEditor<'a> {
    pub fn open(params: EditParams<'a>, base: CommitBase) -> Self {
        debug!(id = %params.contact.id(), "opened editor");

        Self {
            working: params.contact,
            base,
            on_refresh: params.on_refresh,
        }
    }

    pub fn working_copy(&self) -> &Contact {
        &self.working
    }

    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        self.working.set_field(field, value);
    }

    /// Writes the working copy back through `store` and notifies the list.
    ///
    /// Storage failures never escape: they are logged and reflected in
    /// [`CommitOutcome::status`]. If the reload fails nothing is written and
    /// the callback is skipped, so stored and shown contacts stay as they are.
    /// A failed save still fires the callback.
    pub fn commit(self, store: &ContactStore) -> CommitOutcome {
        let ContactEditor {
            working,
            base,
            mut on_refresh,
        } = self;

        let base_contacts = match base {
            CommitBase::Reload => match store.load() {
                Ok(contacts) => contacts,
                Err(e) => {
                    error!(id = %working.id(), error = %e, "error loading data, edit not saved");
                    return CommitOutcome {
                        contacts: None,
                        status: SaveStatus::Failed,
                    };
                }
            },
            CommitBase::Snapshot(snapshot) => snapshot,
        };

        if base_contacts.get(working.id()).is_none() {
            warn!(id = %working.id(), "edited contact is not in the collection, nothing replaced");
        }

        let contacts = base_contacts.with_replaced(&working);

        let status = match store.save(&contacts) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                error!(error = %e, "error saving data");
                SaveStatus::Failed
            }
        };

        on_refresh(&contacts);

        CommitOutcome {
            contacts: Some(contacts),
            status,
        }
    }

    /// Throws the working copy away. Nothing is written and the list is not
    /// notified.
    pub fn cancel(self) {
        debug!(id = %self.working.id(), "discarded edits");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemKvStore;

    fn ann() -> Contact {
        Contact::new("1", "Ann", "Lee", "a@x.com", "555")
    }

    fn store_with(contacts: &ContactCollection) -> ContactStore {
        let store = ContactStore::new(Box::new(MemKvStore::new()), DEFAULT_STORAGE_KEY).unwrap();
        store.save(contacts).unwrap();
        store
    }

    #[test]
    fn commit_persists_and_refreshes_with_same_value() -> Result<(), AppError> {
        let contacts = ContactCollection::from_contacts(vec![ann()])?;
        let store = store_with(&contacts);

        let mut refreshed: Option<ContactCollection> = None;
        let mut editor = ContactEditor::open(
            EditParams::new(ann(), |c| refreshed = Some(c.clone())),
            CommitBase::Reload,
        );
        editor.update(ContactField::Phone, "999");
        let outcome = editor.commit(&store);

        let expected = ContactCollection::from_contacts(vec![Contact::new(
            "1", "Ann", "Lee", "a@x.com", "999",
        )])?;

        assert_eq!(outcome.status, SaveStatus::Saved);
        assert_eq!(outcome.contacts.as_ref(), Some(&expected));
        assert_eq!(store.load()?, expected);
        assert_eq!(refreshed, Some(expected));
        Ok(())
    }

    #[test]
    fn commit_without_changes_still_writes() -> Result<(), AppError> {
        let store = ContactStore::new(Box::new(MemKvStore::new()), DEFAULT_STORAGE_KEY)?;
        let snapshot = ContactCollection::from_contacts(vec![ann()])?;

        let editor = ContactEditor::open(
            EditParams::new(ann(), |_| {}),
            CommitBase::Snapshot(snapshot.clone()),
        );
        editor.commit(&store);

        assert_eq!(store.load()?, snapshot);
        Ok(())
    }

    #[test]
    fn cancel_writes_nothing_and_skips_callback() -> Result<(), AppError> {
        let contacts = ContactCollection::from_contacts(vec![ann()])?;
        let store = store_with(&contacts);

        let mut called = false;
        let mut editor =
            ContactEditor::open(EditParams::new(ann(), |_| called = true), CommitBase::Reload);
        editor.update(ContactField::FirstName, "Anna");
        assert_eq!(editor.working_copy().first_name, "Anna");
        editor.cancel();

        assert!(!called);
        assert_eq!(store.load()?, contacts);
        Ok(())
    }

    #[test]
    fn reload_base_keeps_writes_made_after_open() -> Result<(), AppError> {
        let bob = Contact::new("2", "Bob", "Kim", "b@x.com", "556");
        let opened_with = ContactCollection::from_contacts(vec![ann(), bob.clone()])?;
        let store = store_with(&opened_with);

        let mut editor = ContactEditor::open(EditParams::new(ann(), |_| {}), CommitBase::Reload);
        editor.update(ContactField::Email, "ann@new.com");

        // Someone else updates Bob while the editor is open
        let mut bob_moved = bob.clone();
        bob_moved.phone = "000".to_string();
        store.save(&opened_with.with_replaced(&bob_moved))?;

        editor.commit(&store);

        let stored = store.load()?;
        assert_eq!(stored.get("1").map(|c| c.email.as_str()), Some("ann@new.com"));
        assert_eq!(stored.get("2"), Some(&bob_moved));
        Ok(())
    }

    #[test]
    fn snapshot_base_overwrites_writes_made_after_open() -> Result<(), AppError> {
        let bob = Contact::new("2", "Bob", "Kim", "b@x.com", "556");
        let opened_with = ContactCollection::from_contacts(vec![ann(), bob.clone()])?;
        let store = store_with(&opened_with);

        let mut editor = ContactEditor::open(
            EditParams::new(ann(), |_| {}),
            CommitBase::Snapshot(opened_with.clone()),
        );
        editor.update(ContactField::Email, "ann@new.com");

        let mut bob_moved = bob.clone();
        bob_moved.phone = "000".to_string();
        store.save(&opened_with.with_replaced(&bob_moved))?;

        editor.commit(&store);

        // Stale snapshot wins: Bob's concurrent change is lost
        let stored = store.load()?;
        assert_eq!(stored.get("1").map(|c| c.email.as_str()), Some("ann@new.com"));
        assert_eq!(stored.get("2"), Some(&bob));
        Ok(())
    }

    #[test]
    fn reload_base_over_malformed_slot_leaves_it_alone() -> Result<(), AppError> {
        let store = ContactStore::new(
            Box::new(MemKvStore::with_item(DEFAULT_STORAGE_KEY, "not json")),
            DEFAULT_STORAGE_KEY,
        )?;

        let mut refreshed = None;
        let mut editor = ContactEditor::open(
            EditParams::new(ann(), |c| refreshed = Some(c.len())),
            CommitBase::Reload,
        );
        editor.update(ContactField::Phone, "999");
        let outcome = editor.commit(&store);

        assert!(outcome.contacts.is_none());
        assert_eq!(outcome.status, SaveStatus::Failed);
        assert_eq!(refreshed, None);
        // Nothing was written over the unreadable value
        assert!(store.load().unwrap_err().is_storage_read());
        Ok(())
    }
}
