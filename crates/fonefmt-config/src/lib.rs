use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "fonefmt";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PHONE_COLUMN: &str = "telefone";
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_formatado";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub phone_column: String,
    pub output_suffix: String,
    pub table: TableConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    pub flexible: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            phone_column: DEFAULT_PHONE_COLUMN.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            table: TableConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid phone_column value: {0:?}")]
    InvalidPhoneColumn(String),
    #[error("invalid output_suffix value: {0:?}")]
    InvalidOutputSuffix(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    phone_column: Option<String>,
    output_suffix: Option<String>,
    table: Option<TableFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    flexible: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(column) = parsed.phone_column {
        config.phone_column = validate_phone_column(&column)?;
    }

    if let Some(suffix) = parsed.output_suffix {
        config.output_suffix = validate_output_suffix(&suffix)?;
    }

    if let Some(table) = parsed.table {
        if let Some(flexible) = table.flexible {
            config.table.flexible = flexible;
        }
    }

    Ok(config)
}

pub fn validate_phone_column(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(ConfigError::InvalidPhoneColumn(raw.to_string()));
    }
    Ok(raw.to_string())
}

pub fn validate_output_suffix(raw: &str) -> Result<String> {
    if raw.is_empty() || raw.contains(['/', '\\']) {
        return Err(ConfigError::InvalidOutputSuffix(raw.to_string()));
    }
    Ok(raw.to_string())
}
