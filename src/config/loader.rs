//! Configuration loading from disk, environment and flags.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::CliConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::error::ErrorKind;

/// File looked up in the home directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".proof-cli.toml";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Validation(Vec<ValidationError>),
}

impl ConfigError {
    /// Taxonomy bucket for this error.
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read config file {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config file {}: {}", path.display(), source)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Invalid configuration: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Values that take precedence over the config file.
///
/// Populated from command-line flags and their environment fallbacks.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub debug: Option<bool>,
    pub max_attempts: Option<u32>,
    pub interval_ms: Option<u64>,
    pub rpc_url: Option<String>,
}

impl ConfigOverrides {
    /// Overwrite every field of `config` that has an override.
    pub fn apply(&self, config: &mut CliConfig) {
        if let Some(api_key) = &self.api_key {
            config.api.api_key = api_key.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.api.api_url = api_url.clone();
        }
        if let Some(debug) = self.debug {
            config.observability.debug = debug;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.polling.max_attempts = max_attempts;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.polling.interval_ms = interval_ms;
        }
        if let Some(rpc_url) = &self.rpc_url {
            config.blockchain.rpc_url = Some(rpc_url.clone());
        }
    }
}

impl std::fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("debug", &self.debug)
            .field("max_attempts", &self.max_attempts)
            .field("interval_ms", &self.interval_ms)
            .field("rpc_url", &self.rpc_url)
            .finish()
    }
}

/// `~/.proof-cli.toml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// The file to read: the explicit one, else the default one if it exists.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|path| path.is_file()),
    }
}

/// Parse a TOML config file without validating it.
pub fn read_config_file(path: &Path) -> Result<CliConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load, override and validate configuration.
///
/// Precedence: overrides (flags, then environment) > file > defaults.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<CliConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => CliConfig::default(),
    };

    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
