use colored::Colorize;
use prettytable::{Cell, Row, Table};

use crate::error::CliError;

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a labelled value
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{:<12} {}", format!("{}:", label).bold(), value);
}

/// Print a yes/no flag
pub fn print_flag(label: &str, value: bool) {
    let rendered = if value { "yes".green() } else { "no".red() };
    print_field(label, rendered);
}

/// Print a table with data
pub fn print_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let mut table = Table::new();

    // Add headers
    table.set_titles(Row::new(
        headers.iter().map(|h| Cell::new(h.as_ref())).collect(),
    ));

    // Add data rows
    for row_data in rows {
        table.add_row(Row::new(row_data.iter().map(|c| Cell::new(c)).collect()));
    }

    table.printstd();
}

/// Parse a JSON argument
pub fn parse_json(input: &str) -> Result<serde_json::Value, CliError> {
    serde_json::from_str(input).map_err(|e| CliError::Parse(format!("Invalid JSON: {}", e)))
}

/// Parse a floating point argument
pub fn parse_f64(input: &str) -> Result<f64, CliError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::Parse(format!("Invalid number: {}", input)))
}
