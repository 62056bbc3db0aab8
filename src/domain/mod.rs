pub mod command;
pub mod config;
pub mod error;
pub mod player;
pub mod player_data;
pub mod server_properties;
pub mod validation;

pub use command::{COMMAND_PREFIX, CpdCommand, help_text};
pub use config::{ClearerConfig, CommandTemplates, DataCategory, parse_config_content};
pub use error::AppError;
pub use player::{PlayerKey, offline_uuid, parse_uuid};
pub use player_data::{FileTarget, file_targets};
pub use server_properties::parse_online_mode;
