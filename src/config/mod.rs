/// Application settings loaded from `inventory.toml` and the environment
pub mod settings;

pub use settings::{AppConfig, load_app_configuration, load_config};
