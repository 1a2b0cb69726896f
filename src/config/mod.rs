/// Shop details and inventory parameters from config.toml
pub mod catalog;

pub use catalog::{
    CatalogConfig, Config, ShopConfig, load_app_configuration, load_config, resolve_config,
};
