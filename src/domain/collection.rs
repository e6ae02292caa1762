use super::*;

/// Ordered contacts, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Contact>", into = "Vec<Contact>")]
pub struct ContactCollection {
    contacts: Vec<Contact>,
}

/// A contact as it may appear in a fixture file, where `id` is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedContact {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ContactCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Result<Self, AppError> {
        {
            let mut seen: HashSet<&str> = HashSet::with_capacity(contacts.len());
            for contact in &contacts {
                if !seen.insert(contact.id()) {
                    return Err(AppError::Validation(format!(
                        "Duplicate contact id '{}'",
                        contact.id()
                    )));
                }
            }
        }

        Ok(Self { contacts })
    }

    /// Builds a collection from fixture records, generating ids where missing.
    pub fn from_seed(seed: Vec<SeedContact>) -> Result<Self, AppError> {
        let contacts = seed
            .into_iter()
            .map(|s| match s.id {
                Some(id) if !id.trim().is_empty() => {
                    Contact::new(id, s.first_name, s.last_name, s.email, s.phone)
                }
                _ => Contact::with_generated_id(s.first_name, s.last_name, s.email, s.phone),
            })
            .collect();

        Self::from_contacts(contacts)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    /// Returns a new collection where the record sharing `edited`'s id is
    /// swapped for `edited`. Order and length are kept; an unknown id leaves
    /// the collection as it was.
    pub fn with_replaced(&self, edited: &Contact) -> ContactCollection {
        let contacts = self
            .contacts
            .iter()
            .map(|c| {
                if c.id() == edited.id() {
                    edited.clone()
                } else {
                    c.clone()
                }
            })
            .collect();

        ContactCollection { contacts }
    }
}

impl TryFrom<Vec<Contact>> for ContactCollection {
    type Error = AppError;

    fn try_from(contacts: Vec<Contact>) -> Result<Self, Self::Error> {
        ContactCollection::from_contacts(contacts)
    }
}

impl From<ContactCollection> for Vec<Contact> {
    fn from(collection: ContactCollection) -> Self {
        collection.contacts
    }
}

impl<'a> IntoIterator for &'a ContactCollection {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
