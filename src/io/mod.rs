pub mod config_io;

pub use config_io::{ConfigError, default_config_path, load_config, read_config};
