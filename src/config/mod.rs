//! Source configuration: TOML file, environment, defaults.

pub mod loader;

pub use loader::{SourceConfig, CONFIG_ENV, ENDPOINT_ENV};
