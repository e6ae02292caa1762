use crate::{
    cli::display_contact,
    prelude::{
        AppError, CommitBase, ContactCollection, ContactEditor, ContactField, ContactStore,
        HomeScreen, SaveStatus, StorageMediums,
        command::{Cli, Commands},
        storage::parse_storage_type,
    },
};
use clap::Parser;
use dotenv::dotenv;
use std::path::Path;
use tracing::info;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let medium = StorageMediums::from(&cli.storage)?;
    let store = ContactStore::new(parse_storage_type(medium, &cli.storage_dir)?, &cli.key)?;

    info!(medium = store.medium(), key = store.key(), "storage ready");

    let mut home = HomeScreen::new();
    home.activate(&store);

    match cli.command {
        Commands::List => {
            println!("{}", home.render());
            Ok(())
        }

        Commands::Show { id } => {
            let contact = home
                .contacts()
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", id)))?;

            println!("{}", display_contact(contact));
            Ok(())
        }

        Commands::Edit {
            id,
            first_name,
            last_name,
            email,
            phone,
            discard,
            snapshot,
        } => {
            let updates: Vec<(ContactField, String)> = [
                (ContactField::FirstName, first_name),
                (ContactField::LastName, last_name),
                (ContactField::Email, email),
                (ContactField::Phone, phone),
            ]
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect();

            let base = if snapshot {
                home.snapshot()
            } else {
                CommitBase::Reload
            };

            let mut refreshed: Option<ContactCollection> = None;
            let params = home.edit_params(&id, |contacts| refreshed = Some(contacts.clone()))?;
            let mut editor = ContactEditor::open(params, base);

            for (field, value) in updates {
                editor.update(field, value);
            }

            if discard {
                editor.cancel();
                println!("Changes discarded");
            } else {
                match editor.commit(&store).status {
                    SaveStatus::Saved => println!("Contact updated successfully"),
                    SaveStatus::Failed => println!("Contact updated, but it could not be saved"),
                }
            }

            if let Some(contacts) = refreshed {
                home.apply_refresh(&contacts);
            }

            println!("{}", home.render());
            Ok(())
        }

        Commands::Seed { src } => {
            let seeded = store.seed_from_file(Path::new(&src))?;

            println!("Successfully seeded {} contacts from {:?}.", seeded.len(), src);
            Ok(())
        }

        Commands::Clear => {
            store.clear()?;

            println!("Stored contacts cleared");
            Ok(())
        }
    }
}
