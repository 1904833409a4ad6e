mod commands;
mod config;
mod error;
mod utils;

use std::path::{Path, PathBuf};

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use config::CliConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{
    address::{AddressCommand, ValueCommand},
    amount::AmountCommand,
    assets::AssetsCommand,
    color::ColorCommand,
    number::NumberCommand,
    storage::StorageCommand,
    text::TextCommand,
};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "denom-display")]
#[command(about = "Format token amounts, counts, colours and addresses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Format a raw token amount
    Amount(AmountCommand),

    /// Number helpers
    Number(NumberCommand),

    /// Convert a hex or rgb colour
    Color(ColorCommand),

    /// Check the shape of an address
    Address(AddressCommand),

    /// Check the shape of a JSON message value
    Value(ValueCommand),

    /// Duration and byte helpers
    Text(TextCommand),

    /// Manage the configured asset list
    Assets(AssetsCommand),

    /// Read the local object store
    Storage(StorageCommand),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), CliError> {
    // Pick up DENOM_DISPLAY_* overrides from a local .env
    dotenv::dotenv().ok();

    if std::env::args().len() == 1 {
        init_logging(false);
        return run_interactive(&CliConfig::default_path());
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(CliConfig::default_path);
    let config = CliConfig::load_or_create(&config_path)?;

    execute(cli.command, config, &config_path)
}

/// Interactive mode - keep the CLI running until an exit command
fn run_interactive(config_path: &Path) -> Result<(), CliError> {
    println!("denom-display - Interactive Mode");
    println!("Type 'exit' or 'quit' to exit, 'help' for available commands");

    use rustyline::history::DefaultHistory;
    use rustyline::Editor;
    let mut rl = Editor::<(), DefaultHistory>::new()
        .map_err(|e| CliError::Command(format!("Failed to create line editor: {}", e)))?;

    loop {
        let line = match rl.readline("denom-display> ") {
            Ok(line) => line,
            Err(_) => break,
        };

        if let Err(e) = rl.add_history_entry(line.as_str()) {
            eprintln!("Error adding history entry: {}", e);
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }
        if input == "help" {
            print_help();
            continue;
        }

        // Split input into args
        let args: Vec<String> = shell_words::split(input).unwrap_or_else(|e| {
            eprintln!("Error parsing command: {}", e);
            vec![]
        });
        if args.is_empty() {
            continue;
        }

        if let Err(e) = process_command(args, config_path) {
            eprintln!("Error: {}", e);
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Process a command in the interactive shell
fn process_command(args: Vec<String>, default_path: &Path) -> Result<(), CliError> {
    let matches = Cli::command()
        .try_get_matches_from(std::iter::once(String::from("denom-display")).chain(args))
        .map_err(|e| CliError::Command(format!("Invalid command: {}", e)))?;
    let cli = Cli::from_arg_matches(&matches)
        .map_err(|e| CliError::Command(format!("Failed to parse command: {}", e)))?;

    // Reload on every command so asset edits are visible immediately
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| default_path.to_path_buf());
    let config = CliConfig::load_or_create(&config_path)?;

    execute(cli.command, config, &config_path)
}

fn execute(command: Commands, config: CliConfig, config_path: &Path) -> Result<(), CliError> {
    match command {
        Commands::Amount(cmd) => cmd.execute(config),
        Commands::Number(cmd) => cmd.execute(),
        Commands::Color(cmd) => cmd.execute(),
        Commands::Address(cmd) => cmd.execute(),
        Commands::Value(cmd) => cmd.execute(),
        Commands::Text(cmd) => cmd.execute(),
        Commands::Assets(cmd) => cmd.execute(config, config_path),
        Commands::Storage(cmd) => cmd.execute(),
    }
}

/// Print help message for interactive mode
fn print_help() {
    println!("Available commands:");
    println!("  amount <raw> [-d <denom>]     Format a raw token amount");
    println!("  number abbr <count>           Abbreviate a count (1.5M)");
    println!("  number commas <value>         Insert thousands separators");
    println!("  number percent <ratio>        Express a ratio as a percentage");
    println!("  color <hex|rgb(...)>          Convert a colour to rgb/hsl");
    println!("  address <address>             Check bech32/hex address shape");
    println!("  value <json>                  Check whether a value is a coin or string list");
    println!("  text duration <value>         Render a duration such as 1814400s");
    println!("  text bytes <value>            Show the Latin-1 bytes of a string");
    println!("  text decode <byte>...         Decode bytes back into a string");
    println!("  assets list                   List configured assets");
    println!("  assets add <base> <exponent>  Add or replace an asset");
    println!("  assets remove <base>          Remove an asset");
    println!("  assets import <path>          Import a chain registry assetlist.json");
    println!("  storage get <name>            Print a stored JSON object");
    println!("  storage chains                Show the default local chain list");
    println!("  help                          Show this help message");
    println!("  exit, quit                    Exit the CLI");
}
