//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod service;

use anyhow::Result;
use clap::Subcommand;
use tariff_editor::CatalogEditor;
use tariff_store::{FileKvStore, KvStore, MemoryKvStore, TimestampIds};

use crate::config::{Config, Storage};

/// Editor over whichever backend the configuration selected
pub type Editor<'a> = CatalogEditor<&'a dyn KvStore, TimestampIds>;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new service
    Add {
        /// Service name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Price, a positive number
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        price: String,
    },
    /// List all services
    List,
    /// Show a single service
    Show {
        /// Service ID or name
        service: String,
    },
    /// Change fields of an existing service
    Edit {
        /// Service ID or name
        service: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New price
        #[arg(short, long, allow_hyphen_values = true)]
        price: Option<String>,
    },
    /// Delete a service
    Delete {
        /// Service ID or name
        service: String,
    },
}

/// Handle a CLI command
///
/// Loads the catalog from the configured storage and routes the command to
/// its handler.
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    tracing::debug!("Using storage {:?}", config.storage);

    let backend: Box<dyn KvStore> = match &config.storage {
        Storage::Directory(dir) => Box::new(FileKvStore::new(dir.clone())),
        Storage::Ephemeral => Box::new(MemoryKvStore::new()),
    };
    let port: &dyn KvStore = backend.as_ref();
    let mut editor: Editor<'_> = CatalogEditor::load(port, TimestampIds::new());

    run(command, &mut editor)
}

fn run(command: Commands, editor: &mut Editor<'_>) -> Result<()> {
    match command {
        Commands::Add {
            name,
            description,
            price,
        } => service::add_service(editor, name, description, price),
        Commands::List => service::list_services(editor),
        Commands::Show { service } => service::show_service(editor, &service),
        Commands::Edit {
            service,
            name,
            description,
            price,
        } => service::edit_service(editor, &service, name, description, price),
        Commands::Delete { service } => service::delete_service(editor, &service),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tariff_core::domain::ServiceId;

    fn dir_config(dir: &std::path::Path) -> Config {
        Config {
            storage: Storage::Directory(dir.to_path_buf()),
        }
    }

    fn add(name: &str, description: &str, price: &str) -> Commands {
        Commands::Add {
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn stored_names(dir: &std::path::Path) -> Vec<String> {
        let port = FileKvStore::new(dir);
        let editor = CatalogEditor::load(&port, TimestampIds::new());
        editor.rows().into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_add_list_edit_delete() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir_config(dir.path());

        handle_command(add("Consult", "15-min check", "50"), &config).unwrap();
        handle_command(add("X-ray", "Chest", "80"), &config).unwrap();
        handle_command(Commands::List, &config).unwrap();
        assert_eq!(stored_names(dir.path()), vec!["Consult", "X-ray"]);

        handle_command(
            Commands::Edit {
                service: "consult".to_string(),
                name: Some("Consultation".to_string()),
                description: None,
                price: Some("55".to_string()),
            },
            &config,
        )
        .unwrap();
        handle_command(
            Commands::Show {
                service: "Consultation".to_string(),
            },
            &config,
        )
        .unwrap();
        assert_eq!(stored_names(dir.path()), vec!["Consultation", "X-ray"]);

        handle_command(
            Commands::Delete {
                service: "X-ray".to_string(),
            },
            &config,
        )
        .unwrap();
        assert_eq!(stored_names(dir.path()), vec!["Consultation"]);
    }

    #[test]
    fn test_numeric_name_can_be_shown_and_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir_config(dir.path());
        handle_command(add("2024", "Annual check-up", "90"), &config).unwrap();

        handle_command(
            Commands::Show {
                service: "2024".to_string(),
            },
            &config,
        )
        .unwrap();
        handle_command(
            Commands::Delete {
                service: "2024".to_string(),
            },
            &config,
        )
        .unwrap();
        assert!(stored_names(dir.path()).is_empty());
    }

    #[test]
    fn test_invalid_add_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir_config(dir.path());

        let result = handle_command(add("", "x", "10"), &config);
        assert!(result.is_err());
        assert!(stored_names(dir.path()).is_empty());
    }

    #[test]
    fn test_invalid_edit_keeps_record() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir_config(dir.path());
        handle_command(add("Consult", "Check", "50"), &config).unwrap();

        let result = handle_command(
            Commands::Edit {
                service: "Consult".to_string(),
                name: None,
                description: Some("  ".to_string()),
                price: None,
            },
            &config,
        );
        assert!(result.is_err());
        assert_eq!(stored_names(dir.path()), vec!["Consult"]);
    }

    #[test]
    fn test_delete_missing_id_succeeds() {
        let config = Config {
            storage: Storage::Ephemeral,
        };
        let id = ServiceId(7).to_string();
        handle_command(Commands::Delete { service: id.clone() }, &config).unwrap();
        handle_command(Commands::Delete { service: id }, &config).unwrap();
    }

    #[test]
    fn test_show_and_edit_unknown_service_fail() {
        let config = Config {
            storage: Storage::Ephemeral,
        };
        assert!(handle_command(Commands::Show { service: "7".to_string() }, &config).is_err());
        assert!(
            handle_command(
                Commands::Edit {
                    service: "7".to_string(),
                    name: Some("A".to_string()),
                    description: None,
                    price: None,
                },
                &config,
            )
            .is_err()
        );
    }
}
