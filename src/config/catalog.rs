//! Catalog configuration loading from config.toml
//!
//! This module loads the shop details shown to renters and the parameters used
//! to generate the mock inventory. Every field has a default, so a partial file
//! (or no file at all) still yields a usable configuration.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "CATALOG_CONFIG";

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Shop details shown in the header and info panel
    pub shop: ShopConfig,
    /// Inventory generation parameters
    pub catalog: CatalogConfig,
}

/// Shop details
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShopConfig {
    /// Shop name shown in the header
    pub name: String,
    /// Short description after the name
    pub tagline: String,
    /// Where bags are collected
    pub pickup_location: String,
    /// Full postal address for pickup
    pub address: String,
    /// WhatsApp contact number
    pub whatsapp: String,
    /// Currency prefix used when printing prices (e.g., "RM")
    pub currency: String,
    /// Accepted payment methods, in display order
    pub payment_methods: Vec<String>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: "Clutch-a-Bling".to_string(),
            tagline: "Evening Bag Rental".to_string(),
            pickup_location: "Seksyen 13, Shah Alam".to_string(),
            address: "Seksyen 13, Shah Alam, Selangor, Malaysia".to_string(),
            whatsapp: "+60 1X-XXX XXXX".to_string(),
            currency: "RM".to_string(),
            payment_methods: vec![
                "Bank transfer (Maybank/CIMB)".to_string(),
                "eWallets (TnG, GrabPay)".to_string(),
                "PayPal".to_string(),
                "Cash on pickup (by arrangement)".to_string(),
            ],
        }
    }
}

/// Inventory generation parameters
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Number of bags to generate
    pub size: u32,
    /// Fixed RNG seed for a reproducible catalog; random when absent
    pub seed: Option<u64>,
    /// Base URL of the external image host
    pub image_host: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            size: 300,
            seed: None,
            image_host: "https://picsum.photos".to_string(),
        }
    }
}

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.display()),
    })
}

/// Loads the application configuration.
///
/// An explicit `CATALOG_CONFIG` path must exist and parse; otherwise the
/// default location is tried.
///
/// # Errors
/// Returns an error if the chosen file cannot be read or parsed.
pub fn load_app_configuration() -> Result<Config> {
    resolve_config(
        std::env::var(CONFIG_PATH_VAR).ok(),
        Path::new(DEFAULT_CONFIG_PATH),
    )
}

/// Picks the configuration source.
///
/// `explicit` is the value of `CATALOG_CONFIG`, if set. A named file is always
/// loaded, so a missing or malformed one is an error. Without it, `default_path`
/// is loaded when present and built-in defaults are used when it is absent.
///
/// # Errors
/// Returns `Error::Config` if the chosen file cannot be read or parsed.
pub fn resolve_config(explicit: Option<String>, default_path: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        info!("Loading configuration from {CONFIG_PATH_VAR}={path}");
        return load_config(path);
    }
    if default_path.exists() {
        load_config(default_path)
    } else {
        info!(
            "No {} found, using built-in defaults",
            default_path.display()
        );
        Ok(Config::default())
    }
}
