use std::str::FromStr;

use clap::Args;
use denom_display::{Coin, DenomRef, DenomTrace, Uint128};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::utils::print_field;

#[derive(Args, Clone)]
pub struct AmountCommand {
    /// Raw amount in the smallest unit (e.g. 12345670000)
    amount: String,

    /// Denom of the amount (defaults to the configured denom)
    #[arg(short, long)]
    denom: Option<String>,

    /// Fractional digits for amounts above 10 display units
    #[arg(long)]
    decimals: Option<u32>,

    /// Return the bare rounded number for large amounts
    #[arg(long)]
    no_grouping: bool,

    /// Treat the denom as the base of an IBC trace with this path
    #[arg(long)]
    ibc_path: Option<String>,

    /// Also print the exact decimal value
    #[arg(long)]
    exact: bool,
}

impl AmountCommand {
    pub fn execute(self, config: CliConfig) -> Result<(), CliError> {
        let formatter = config.formatter();
        let options = formatter.options().clone();

        let base_denom = self.denom.unwrap_or_else(|| options.denom.clone());
        let denom = match self.ibc_path {
            Some(path) => DenomRef::from(DenomTrace {
                base_denom: base_denom.clone(),
                path,
            }),
            None => DenomRef::from(base_denom.clone()),
        };

        let formatted = formatter.format_with(
            self.amount.as_str(),
            denom,
            self.decimals.unwrap_or(options.decimals),
            options.grouping && !self.no_grouping,
        );
        tracing::debug!(
            amount = %self.amount,
            denom = %base_denom,
            exponent = formatter.exponent_for(&base_denom),
            "Formatted amount"
        );
        println!("{}", formatted);

        if self.exact {
            let amount = Uint128::from_str(self.amount.trim())
                .map_err(|_| CliError::Parse(format!("Invalid amount: {}", self.amount)))?;
            let coin = Coin {
                denom: base_denom,
                amount,
            };
            print_field("Exact", formatter.to_decimal(&coin)?);
        }

        Ok(())
    }
}
