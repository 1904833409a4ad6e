use clap::Args;
use denom_display::{hex_to_rgb, rgb_to_hsl};

use crate::error::CliError;
use crate::utils::print_field;

#[derive(Args, Clone)]
pub struct ColorCommand {
    /// Hex colour (#ff8000) or rgb(...) string
    value: String,
}

impl ColorCommand {
    pub fn execute(self) -> Result<(), CliError> {
        let rgb_color = if self.value.trim_start().starts_with("rgb(") {
            self.value.clone()
        } else {
            let rgb = hex_to_rgb(&self.value);
            print_field("RGB", &rgb.color);
            rgb.color
        };

        let hsl = rgb_to_hsl(&rgb_color);
        print_field("HSL", &hsl.color);
        print_field("CSS value", &hsl.value);
        Ok(())
    }
}
