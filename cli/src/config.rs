use std::fs;
use std::path::{Path, PathBuf};

use denom_display::{AmountFormatter, AssetDescriptor, AssetRegistry, DisplayConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI Configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Formatting defaults and symbol overrides
    #[serde(default)]
    pub display: DisplayConfig,

    /// Known assets used for exponent lookup
    #[serde(default)]
    pub registry: AssetRegistry,
}

impl CliConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, writing the defaults if the file does not exist yet
    pub fn load_or_create(path: &Path) -> Result<Self, CliError> {
        if path.exists() {
            return Self::load(path);
        }

        let config = Self::default();
        config.save(path)?;
        tracing::info!("Created default config at {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let content = toml::to_string_pretty(self)?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("denom-display-cli");
        path.push("config.toml");
        path
    }

    /// Amount formatter over the configured assets and defaults
    pub fn formatter(&self) -> AmountFormatter {
        AmountFormatter::from_config(&self.display, &self.registry)
    }

    /// Add an asset, replacing any existing entry with the same base denom
    pub fn upsert_asset(&mut self, asset: AssetDescriptor) -> bool {
        match self
            .registry
            .assets
            .iter_mut()
            .find(|existing| existing.base == asset.base)
        {
            Some(existing) => {
                *existing = asset;
                true
            }
            None => {
                self.registry.assets.push(asset);
                false
            }
        }
    }

    /// Remove an asset by base denom
    pub fn remove_asset(&mut self, base: &str) -> Result<(), CliError> {
        let before = self.registry.assets.len();
        self.registry.assets.retain(|asset| asset.base != base);
        if self.registry.assets.len() == before {
            return Err(CliError::Asset(format!("Asset '{}' not found", base)));
        }
        Ok(())
    }

    /// Merge a chain registry asset list into the configured assets
    pub fn import_registry(&mut self, registry: AssetRegistry) -> usize {
        if self.registry.chain_name.is_empty() {
            self.registry.chain_name = registry.chain_name.clone();
        }
        let count = registry.assets.len();
        for asset in registry.assets {
            self.upsert_asset(asset);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_and_remove_asset() {
        let mut config = CliConfig::default();
        assert!(!config.upsert_asset(AssetDescriptor::new("inj", 6)));
        assert!(config.upsert_asset(AssetDescriptor::new("inj", 18)));
        assert_eq!(config.registry.assets.len(), 1);
        assert_eq!(config.formatter().exponent_for("inj"), 18);

        assert!(config.remove_asset("inj").is_ok());
        assert!(matches!(config.remove_asset("inj"), Err(CliError::Asset(_))));
    }

    #[test]
    fn test_load_or_create() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cli").join("config.toml");

        let created = CliConfig::load_or_create(&path).unwrap();
        assert!(path.exists());

        let mut updated = created.clone();
        updated.display.add_symbol("ulume".to_string(), "LUME".to_string());
        updated.upsert_asset(AssetDescriptor::new("ulume", 6));
        updated.save(&path).unwrap();

        assert_eq!(CliConfig::load_or_create(&path).unwrap(), updated);
    }
}
