use clap::{Args, Subcommand};
use denom_display::{format_number, number_with_commas, percent};

use crate::error::CliError;
use crate::utils::parse_f64;

#[derive(Args, Clone)]
pub struct NumberCommand {
    #[command(subcommand)]
    pub command: NumberCommands,
}

#[derive(Subcommand, Clone)]
pub enum NumberCommands {
    /// Scale a count by powers of a thousand (1500000 -> 1.5M)
    Abbr {
        /// Count to scale
        #[arg(allow_hyphen_values = true)]
        count: String,

        /// Print the scaled number without a suffix
        #[arg(long)]
        plain: bool,

        /// Fractional digits to keep
        #[arg(short, long, default_value_t = 2)]
        decimals: u32,
    },

    /// Insert thousands separators
    Commas {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Express a ratio as a percentage
    Percent {
        #[arg(allow_hyphen_values = true)]
        ratio: String,
    },
}

impl NumberCommand {
    pub fn execute(self) -> Result<(), CliError> {
        match self.command {
            NumberCommands::Abbr {
                count,
                plain,
                decimals,
            } => {
                println!("{}", format_number(parse_f64(&count)?, !plain, decimals));
            }
            NumberCommands::Commas { value } => {
                println!("{}", number_with_commas(parse_f64(&value)?));
            }
            NumberCommands::Percent { ratio } => {
                println!("{}%", percent(parse_f64(&ratio)?));
            }
        }
        Ok(())
    }
}
