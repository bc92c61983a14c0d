use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the data files live in. Relative paths resolve against the working directory.
    pub data_dir: PathBuf,
    pub users_file: String,
    pub clients_file: String,
    pub objects_file: String,
    pub contracts_file: String,
    /// Fill empty stores with demo records on startup.
    pub seed_defaults: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            users_file: "users.dat".to_string(),
            clients_file: "clients.dat".to_string(),
            objects_file: "objects.dat".to_string(),
            contracts_file: "contracts.dat".to_string(),
            seed_defaults: true,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("contracts-cli")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    pub fn clients_path(&self) -> PathBuf {
        self.data_dir.join(&self.clients_file)
    }

    pub fn objects_path(&self) -> PathBuf {
        self.data_dir.join(&self.objects_file)
    }

    pub fn contracts_path(&self) -> PathBuf {
        self.data_dir.join(&self.contracts_file)
    }
}
