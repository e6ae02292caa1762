use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rusty-contacts", version, about = "Contact list backed by a key-value slot")]
pub struct Cli {
    /// Storage medium: file, or mem (kept in memory, nothing survives the run)
    #[arg(long, env = "CONTACTS_STORAGE", default_value_t = String::from("file"))]
    pub storage: String,

    /// Directory holding the file storage slots
    #[arg(long, env = "CONTACTS_STORAGE_DIR", default_value_t = String::from("./.instance"))]
    pub storage_dir: String,

    /// Key the contact collection is stored under
    #[arg(long, env = "CONTACTS_STORAGE_KEY", default_value_t = String::from("jsonData"))]
    pub key: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts
    List,

    /// Show every field of one contact
    Show {
        /// Contact id
        #[arg(long)]
        id: String,
    },

    /// Edit an existing contact.
    /// Provide the contact id followed by any fields you wish to update
    Edit {
        /// Contact id
        #[arg(long)]
        id: String,

        /// Update first name
        #[arg(long)]
        first_name: Option<String>,

        /// Update last name
        #[arg(long)]
        last_name: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Throw the edits away instead of saving them
        #[arg(long)]
        discard: bool,

        /// Save against the list as it was loaded, ignoring newer writes
        #[arg(long)]
        snapshot: bool,
    },

    /// Replace the stored contacts with a JSON fixture file
    Seed {
        /// File path to the source .json file
        #[arg(short, long)]
        src: String,
    },

    /// Remove the stored contacts
    Clear,
}
