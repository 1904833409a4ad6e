use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use denom_display::{AssetDescriptor, AssetRegistry};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::utils::{print_success, print_table};

#[derive(Args, Clone)]
pub struct AssetsCommand {
    #[command(subcommand)]
    pub command: AssetsCommands,
}

#[derive(Subcommand, Clone)]
pub enum AssetsCommands {
    /// List configured assets with their exponent and display symbol
    List,

    /// Add or replace an asset
    Add {
        /// Base denom (e.g. uatom)
        base: String,

        /// Power of ten between base and display unit
        exponent: u32,

        /// Display symbol override
        #[arg(short, long)]
        symbol: Option<String>,
    },

    /// Remove an asset
    Remove {
        /// Base denom
        base: String,
    },

    /// Import a chain registry assetlist.json
    Import {
        /// Path to the asset list
        path: PathBuf,
    },
}

impl AssetsCommand {
    pub fn execute(self, mut config: CliConfig, config_path: &Path) -> Result<(), CliError> {
        match self.command {
            AssetsCommands::List => {
                if config.registry.assets.is_empty() {
                    println!("No assets configured.");
                    return Ok(());
                }

                let formatter = config.formatter();
                let rows = config
                    .registry
                    .assets
                    .iter()
                    .map(|asset| {
                        vec![
                            asset.base.clone(),
                            asset.exponent.to_string(),
                            formatter.symbol_for(&asset.base),
                            asset.display.clone().unwrap_or_default(),
                        ]
                    })
                    .collect();

                print_table(vec!["Base", "Exponent", "Symbol", "Display"], rows);
                Ok(())
            }

            AssetsCommands::Add {
                base,
                exponent,
                symbol,
            } => {
                if let Some(symbol) = symbol {
                    config.display.add_symbol(base.clone(), symbol);
                }
                let replaced = config.upsert_asset(AssetDescriptor::new(base.clone(), exponent));
                config.save(config_path)?;

                if replaced {
                    print_success(&format!("Updated asset '{}'", base));
                } else {
                    print_success(&format!("Added asset '{}'", base));
                }
                Ok(())
            }

            AssetsCommands::Remove { base } => {
                config.remove_asset(&base)?;
                config.display.symbols.remove(&base);
                config.save(config_path)?;
                print_success(&format!("Removed asset '{}'", base));
                Ok(())
            }

            AssetsCommands::Import { path } => {
                let content = fs::read_to_string(&path)?;
                let registry = AssetRegistry::from_chain_registry(&content)?;
                let chain = registry.chain_name.clone();
                let count = config.import_registry(registry);
                config.save(config_path)?;
                print_success(&format!("Imported {} assets from {}", count, chain));
                Ok(())
            }
        }
    }
}
