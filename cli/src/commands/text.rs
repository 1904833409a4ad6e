use clap::{Args, Subcommand};
use denom_display::{bytes_to_string, format_seconds, string_to_bytes};

use crate::error::CliError;
use crate::utils::print_field;

#[derive(Args, Clone)]
pub struct TextCommand {
    #[command(subcommand)]
    pub command: TextCommands,
}

#[derive(Subcommand, Clone)]
pub enum TextCommands {
    /// Render a duration such as 1814400s in days, hours or minutes
    Duration { value: String },

    /// Show the Latin-1 bytes of a string
    Bytes { value: String },

    /// Decode space separated byte values back into a string
    Decode {
        #[arg(num_args = 1..)]
        bytes: Vec<u8>,
    },
}

impl TextCommand {
    pub fn execute(self) -> Result<(), CliError> {
        match self.command {
            TextCommands::Duration { value } => {
                println!("{}", format_seconds(Some(&value)));
            }
            TextCommands::Bytes { value } => {
                let bytes = string_to_bytes(&value);
                print_field("Length", bytes.len());
                print_field(
                    "Bytes",
                    bytes
                        .iter()
                        .map(|b| b.to_string())
                        .collect::<Vec<_>>()
                        .join(" "),
                );
            }
            TextCommands::Decode { bytes } => {
                println!("{}", bytes_to_string(&bytes));
            }
        }
        Ok(())
    }
}
