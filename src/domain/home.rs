use super::*;

pub const EMPTY_LIST_MESSAGE: &str = "No Contact";

/// State behind the contact list: whatever collection is currently on screen.
#[derive(Debug, Default)]
pub struct HomeScreen {
    contacts: ContactCollection,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reloads from the store. A failed read keeps what is already shown.
    pub fn activate(&mut self, store: &ContactStore) {
        let cached = std::mem::take(&mut self.contacts);
        self.contacts = store.load_or(cached);
    }

    pub fn apply_refresh(&mut self, contacts: &ContactCollection) {
        self.contacts = contacts.clone();
    }

    pub fn contacts(&self) -> &ContactCollection {
        &self.contacts
    }

    pub fn rows(&self) -> Vec<String> {
        self.contacts.iter().map(Contact::display_name).collect()
    }

    pub fn render(&self) -> String {
        if self.contacts.is_empty() {
            return EMPTY_LIST_MESSAGE.to_string();
        }

        self.contacts
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:>3}. {:<30} [{}]", i + 1, c.display_name(), c.id()))
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Parameters for editing the row with `id`.
    pub fn edit_params<'a>(
        &self,
        id: &str,
        on_refresh: impl FnMut(&ContactCollection) + 'a,
    ) -> Result<EditParams<'a>, AppError> {
        let contact = self
            .contacts
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", id)))?;

        Ok(EditParams::new(contact.clone(), on_refresh))
    }

    /// Snapshot of the list as it is now, for [`CommitBase::Snapshot`].
    pub fn snapshot(&self) -> CommitBase {
        CommitBase::Snapshot(self.contacts.clone())
    }
}
