//! Loading `config.yml`, installing the bundled default on first run.

use std::fs;
use std::path::Path;

use include_dir::{Dir, include_dir};
use tracing::info;

use crate::domain::{AppError, ClearerConfig, parse_config_content};

static CONFIG_ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/config");

/// Default location of the clearer configuration, relative to the current directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/clear_player_data/config.yml";

const DEFAULT_CONFIG_ASSET: &str = "config_default.yml";

/// Bundled default configuration.
pub fn default_config_content() -> Result<&'static str, AppError> {
    CONFIG_ASSET_DIR
        .get_file(DEFAULT_CONFIG_ASSET)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::config_error("Bundled default configuration is missing"))
}

/// Write the bundled default to `path` unless a file already exists there.
///
/// Returns `true` when the file was written.
pub fn install_default_config(path: &Path) -> Result<bool, AppError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_config_content()?)?;
    info!(path = %path.display(), "Installed default configuration");
    Ok(true)
}

/// Load configuration from `path`, installing the default first if needed.
pub fn load_config(path: &Path) -> Result<ClearerConfig, AppError> {
    install_default_config(path)?;
    let content = fs::read_to_string(path)?;
    parse_config_content(&content).map_err(|err| match err {
        AppError::Configuration(message) => {
            AppError::Configuration(format!("{}: {}", path.display(), message))
        }
        other => other,
    })
}
