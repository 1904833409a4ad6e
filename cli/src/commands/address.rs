use clap::Args;
use denom_display::{is_bech32_address, is_hex_address, is_string_array, is_token};

use crate::error::CliError;
use crate::utils::{parse_json, print_flag};

#[derive(Args, Clone)]
pub struct AddressCommand {
    /// Address to inspect
    value: String,
}

impl AddressCommand {
    pub fn execute(self) -> Result<(), CliError> {
        print_flag("Bech32", is_bech32_address(Some(&self.value)));
        print_flag("Hex", is_hex_address(&self.value));
        Ok(())
    }
}

#[derive(Args, Clone)]
pub struct ValueCommand {
    /// JSON value from a message, e.g. '{"denom":"uatom","amount":"1"}'
    json: String,
}

impl ValueCommand {
    pub fn execute(self) -> Result<(), CliError> {
        let value = parse_json(&self.json)?;
        print_flag("Token", is_token(&value));
        print_flag("String list", is_string_array(&value));
        Ok(())
    }
}
