use anyhow::Context;
use pagewright_catalog::BlockCatalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagewright.config.json";

/// Pagewright configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory of `{id}.json` site records
    #[serde(default = "default_sites_dir")]
    pub sites_dir: String,

    /// Where `publish` writes HTML
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Snapshots kept by `apply` (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Pretty print published HTML
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Custom catalog JSON replacing the built-in blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_sites_dir() -> String {
    "sites".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_history_limit() -> usize {
    100
}

fn default_pretty() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_sites_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.sites_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    /// The configured catalog, or the built-in one
    pub fn load_catalog(&self, cwd: &str) -> anyhow::Result<BlockCatalog> {
        match &self.catalog {
            Some(path) => {
                let path = PathBuf::from(cwd).join(path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Cannot read catalog {}", path.display()))?;
                Ok(BlockCatalog::from_json(&json)?)
            }
            None => Ok(BlockCatalog::builtin()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sites_dir: default_sites_dir(),
            out_dir: default_out_dir(),
            history_limit: default_history_limit(),
            pretty: default_pretty(),
            log_level: default_log_level(),
            catalog: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "sitesDir": "data/sites",
            "outDir": "public",
            "historyLimit": 20,
            "pretty": false,
            "logLevel": "debug",
            "catalog": "blocks.json"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.sites_dir, "data/sites");
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.history_limit, 20);
        assert!(!config.pretty);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.catalog.as_deref(), Some("blocks.json"));
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sites_dir, "sites");
        assert_eq!(config.history_limit, 100);
        assert!(config.pretty);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_builtin_catalog_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Config::default()
            .load_catalog(&dir.path().display().to_string())
            .unwrap();
        assert!(catalog.contains_type("hero"));
    }
}
