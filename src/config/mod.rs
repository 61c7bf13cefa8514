//! Configuration: default button labels and alert presets.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::Config;
