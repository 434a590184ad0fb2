//! Configuration loading and root folder resolution
//!
//! Every setting follows the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV: &str = "FYYUR_ROOT_FOLDER";
/// Environment variable overriding the bind host
pub const HOST_ENV: &str = "FYYUR_HOST";
/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "FYYUR_PORT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "fyyur.db";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl TomlConfig {
    /// Parse a config file, failing on I/O or syntax errors
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load from an explicit path or the platform location.
    ///
    /// A missing or malformed file never aborts startup: a warning is logged
    /// and an empty config is returned.
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_file() {
                Some(path) => path,
                None => return Self::default(),
            },
        };

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Command-line values; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root_folder: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub root_folder: PathBuf,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn resolve(cli: &CliOverrides, file: &TomlConfig) -> Result<Self> {
        let root_folder = resolve_root_folder(cli.root_folder.as_deref(), ROOT_FOLDER_ENV, file);

        let host = non_empty(cli.host.clone())
            .or_else(|| non_empty(std::env::var(HOST_ENV).ok()))
            .or_else(|| non_empty(file.host.clone()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match (cli.port, non_empty(std::env::var(PORT_ENV).ok())) {
            (Some(port), _) => port,
            (None, Some(raw)) => raw
                .parse()
                .map_err(|_| Error::Config(format!("{} is not a valid port: {}", PORT_ENV, raw)))?,
            (None, None) => file.port.unwrap_or(DEFAULT_PORT),
        };

        Ok(Self {
            root_folder,
            host,
            port,
        })
    }

    /// Path of the SQLite database inside the root folder
    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Blank settings count as unset
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve the root folder holding `fyyur.db`
pub fn resolve_root_folder(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    file: &TomlConfig,
) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &file.root_folder {
        return path.clone();
    }

    default_root_folder()
}

/// Platform config file location, if one exists
fn default_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/fyyur/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// OS-dependent default root folder path
pub fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/fyyur
        dirs::data_local_dir()
            .map(|d| d.join("fyyur"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/fyyur"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("fyyur"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/fyyur"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("fyyur"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\fyyur"))
    } else {
        PathBuf::from("./fyyur_data")
    }
}
