//! Configuration loading and management.

mod file;
mod paths;
mod types;
mod validate;

pub use file::{load_config, load_config_file, save_config};
pub use paths::{config_dir, config_file_path};
pub use types::{ArraysConfig, Config, OutputConfig, ReferenceConfig, SourceConfig};
pub use validate::validate_config;
