//! Application configuration.
//!
//! Loaded once at startup from a TOML file (or defaults when the file is
//! absent); there is no file watching or hot reload.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AdminConfig, AppConfig, GeneratorConfig, SeedConfig, SignupConfig};
