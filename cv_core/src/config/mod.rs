//! Layered application configuration

mod settings;

pub use settings::{AppConfig, CONFIG_FILE_ENV, ContactConfig, CorsConfig, ServerConfig, SiteConfig};
