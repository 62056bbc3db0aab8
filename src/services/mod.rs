mod config_store;
mod http_profile_lookup;
mod player_files;
mod server_properties_reader;
mod stdio_host;

pub use config_store::{
    DEFAULT_CONFIG_PATH, default_config_content, install_default_config, load_config,
};
pub use http_profile_lookup::{DEFAULT_MAX_ATTEMPTS, HttpProfileLookup};
pub use player_files::{DeleteReport, SECONDS_PER_DAY, delete_all, find_stale};
pub use server_properties_reader::read_online_mode;
pub use stdio_host::StdioHost;
