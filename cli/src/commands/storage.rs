use std::path::PathBuf;

use clap::{Args, Subcommand};
use denom_display::{local_chains, LocalStore};

use crate::error::CliError;

#[derive(Args, Clone)]
pub struct StorageCommand {
    #[command(subcommand)]
    pub command: StorageCommands,
}

#[derive(Subcommand, Clone)]
pub enum StorageCommands {
    /// Print a stored JSON object
    Get {
        /// Object name, read from <dir>/<name>.json
        name: String,

        /// Storage directory (defaults to the user data directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Print the selected chain list
    Chains,
}

impl StorageCommand {
    pub fn execute(self) -> Result<(), CliError> {
        match self.command {
            StorageCommands::Get { name, dir } => {
                let store = match dir {
                    Some(dir) => LocalStore::new(dir),
                    None => LocalStore::open_default()?,
                };

                match store.get_object(&name)? {
                    Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                    None => println!("No object named '{}' in {}", name, store.dir().display()),
                }
            }
            StorageCommands::Chains => println!("{}", local_chains()),
        }
        Ok(())
    }
}
