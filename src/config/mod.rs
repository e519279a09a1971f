mod io;
mod types;

pub use io::{config_path, load_config, write_config, ConfigError, CONFIG_FILE};
pub use types::ShopConfig;
