//! Application settings.
//!
//! Settings come from an optional TOML file (`inventory.toml` in the working directory,
//! or the file named by `INVENTORY_CONFIG`), with `INVENTORY_DATA_DIR` overriding the
//! data directory. Every key is optional; the defaults reproduce the classic layout of
//! three text files in the current directory.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file looked up in the working directory when `INVENTORY_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "inventory.toml";
/// Names an explicit config file; it must exist.
pub const CONFIG_ENV_VAR: &str = "INVENTORY_CONFIG";
/// Overrides `data_dir` from the config file.
pub const DATA_DIR_ENV_VAR: &str = "INVENTORY_DATA_DIR";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the record files
    pub data_dir: PathBuf,
    /// Product file name, relative to `data_dir`
    pub products_file: PathBuf,
    /// Supplier file name, relative to `data_dir`
    pub suppliers_file: PathBuf,
    /// Order file name, relative to `data_dir`
    pub orders_file: PathBuf,
    /// Products at or below this quantity appear in the low stock report
    pub low_stock_threshold: u32,
    /// Prefix printed before prices
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            products_file: PathBuf::from("products.txt"),
            suppliers_file: PathBuf::from("suppliers.txt"),
            orders_file: PathBuf::from("orders.txt"),
            low_stock_threshold: 10,
            currency: "RM".to_string(),
        }
    }
}

impl AppConfig {
    /// Default configuration rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the product file.
    #[must_use]
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }

    /// Full path of the supplier file.
    #[must_use]
    pub fn suppliers_path(&self) -> PathBuf {
        self.data_dir.join(&self.suppliers_file)
    }

    /// Full path of the order file.
    #[must_use]
    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(&self.orders_file)
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Resolves the configuration from an optional explicit file and an optional data
/// directory override.
///
/// Without an explicit file, `inventory.toml` is used if present and defaults otherwise.
///
/// # Errors
/// Returns `Error::Config` if an explicit file is missing or any file fails to parse.
pub fn resolve_config(
    explicit: Option<PathBuf>,
    data_dir_override: Option<PathBuf>,
) -> Result<AppConfig> {
    let mut config = match explicit {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => load_config(DEFAULT_CONFIG_FILE)?,
        None => {
            debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
            AppConfig::default()
        }
    };

    if let Some(dir) = data_dir_override {
        config.data_dir = dir;
    }
    Ok(config)
}

/// Loads the application configuration from the process environment.
///
/// # Errors
/// See [`resolve_config`].
pub fn load_app_configuration() -> Result<AppConfig> {
    let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let data_dir = std::env::var_os(DATA_DIR_ENV_VAR).map(PathBuf::from);
    let config = resolve_config(explicit, data_dir)?;
    info!(data_dir = %config.data_dir.display(), "Configuration resolved");
    Ok(config)
}
