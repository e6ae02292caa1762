pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::{Contact, ContactField};

pub fn display_contact(contact: &Contact) -> String {
    let mut output = format!("Id: {}", contact.id());

    for field in ContactField::ALL {
        output.push_str(&format!("\n{}: {}", field.label(), contact.field(field)));
    }
    output
}
