use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BerthConfig {
    pub log_level: String,
    pub storage: StorageConfig,
    pub ssh: SshConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SshConfig {
    /// Client binary, resolved on PATH unless given as an absolute path.
    pub binary: String,
}

impl Default for BerthConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            storage: StorageConfig::default(),
            ssh: SshConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_berth_dir()
            .join("servers.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            binary: "ssh".into(),
        }
    }
}

/// Returns `~/.berth/`
pub fn default_berth_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".berth")
}

/// Returns the default config file path: `~/.berth/config.toml`
pub fn default_config_path() -> PathBuf {
    default_berth_dir().join("config.toml")
}

impl BerthConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            BerthConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (BERTH_DB, BERTH_SSH, BERTH_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BERTH_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("BERTH_SSH") {
            self.ssh.binary = val;
        }
        if let Ok(val) = std::env::var("BERTH_LOG_LEVEL") {
            self.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
