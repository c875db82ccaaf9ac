//! Configuration file management for daybot.
//!
//! Provides a TOML-based config file at `~/.config/daybot/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory holding per-day state files. Unset means the XDG data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the daybot config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/daybot` or `~/.config/daybot`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("daybot");
    }
    home_dir().join(".config").join("daybot")
}

/// Return the path to the daybot config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default data directory: `$XDG_DATA_HOME/daybot` or `~/.local/share/daybot`.
pub fn default_data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("daybot");
    }
    home_dir().join(".local").join("share").join("daybot")
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
}

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaybotConfig {
    pub bind: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl DaybotConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        let path = config_path();
        let file_config = if path.exists() {
            Some(load_config_from(&path)?)
        } else {
            None
        };
        Self::resolve_with(cli, file_config.as_ref())
    }

    /// Resolve against an already-loaded config file.
    ///
    /// - bind: `cli.bind` > `DAYBOT_BIND` > `server.bind` > `127.0.0.1`
    /// - port: `cli.port` > `DAYBOT_PORT` > `server.port` > `3000`
    /// - data dir: `cli.data_dir` > `DAYBOT_DATA_DIR` > `storage.data_dir` > XDG data dir
    pub fn resolve_with(cli: &CliOverrides, file: Option<&ConfigFile>) -> Result<Self> {
        let bind = if let Some(ref bind) = cli.bind {
            bind.clone()
        } else if let Ok(bind) = std::env::var("DAYBOT_BIND") {
            bind
        } else if let Some(cfg) = file {
            cfg.server.bind.clone()
        } else {
            DEFAULT_BIND.to_string()
        };

        let port = if let Some(port) = cli.port {
            port
        } else if let Ok(raw) = std::env::var("DAYBOT_PORT") {
            raw.parse::<u16>()
                .with_context(|| format!("DAYBOT_PORT env var is not a valid port: {raw:?}"))?
        } else if let Some(cfg) = file {
            cfg.server.port
        } else {
            DEFAULT_PORT
        };

        let data_dir = if let Some(ref dir) = cli.data_dir {
            dir.clone()
        } else if let Ok(dir) = std::env::var("DAYBOT_DATA_DIR") {
            PathBuf::from(dir)
        } else if let Some(dir) = file.and_then(|cfg| cfg.storage.data_dir.clone()) {
            dir
        } else {
            default_data_dir()
        };

        Ok(Self {
            bind,
            port,
            data_dir,
        })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
