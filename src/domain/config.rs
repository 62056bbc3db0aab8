//! Clearer configuration (`config.yml`): parse and validate.
//!
//! Every top-level key whose value is a mapping, other than `command`, is a
//! data category mapping sub-keys to directories relative to `world_dir`.
//! Category order follows the file.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use url::Url;

use super::AppError;
use super::player::PlayerKey;

pub const COMMAND_KEY: &str = "command";
/// Category whose entries are named after the player key with no suffix.
pub const FILE_CATEGORY: &str = "file";
pub const UUID_PLACEHOLDER: &str = "<uuid>";
pub const PLAYERID_PLACEHOLDER: &str = "<playerid>";

pub const DEFAULT_WORKING_DIRECTORY: &str = "server";
pub const DEFAULT_ONLINE_API: &str = "https://api.mojang.com/users/profiles/minecraft/";
pub const DEFAULT_CLEAN_DIR: &str = "playerdata";

/// One configured class of player data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataCategory {
    pub name: String,
    /// `(sub-key, directory relative to world_dir)` in file order.
    pub paths: Vec<(String, String)>,
}

impl DataCategory {
    /// File or directory name holding `key`'s data in this category.
    pub fn entry_name(&self, key: &PlayerKey) -> String {
        if self.name == FILE_CATEGORY {
            key.as_str().to_string()
        } else {
            format!("{}.{}", key, self.name)
        }
    }
}

/// Server commands run before deletion, keyed by trigger name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTemplates {
    pub uuid: Vec<(String, String)>,
    pub playerid: Vec<(String, String)>,
}

impl CommandTemplates {
    pub fn playerid_template(&self, trigger: &str) -> Option<&str> {
        self.playerid.iter().find(|(key, _)| key == trigger).map(|(_, template)| template.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearerConfig {
    pub world_dir: String,
    pub working_directory: PathBuf,
    pub online_api: Url,
    pub clean_dir: String,
    pub categories: Vec<DataCategory>,
    pub commands: CommandTemplates,
}

impl ClearerConfig {
    /// `working_directory/world_dir`.
    pub fn world_path(&self) -> PathBuf {
        self.working_directory.join(&self.world_dir)
    }

    /// Directory scanned by the stale-data cleanup.
    pub fn clean_path(&self) -> PathBuf {
        self.world_path().join(&self.clean_dir)
    }

    pub fn server_properties_path(&self) -> PathBuf {
        self.working_directory.join("server.properties")
    }

    pub fn with_working_directory(mut self, working_directory: &Path) -> Self {
        self.working_directory = working_directory.to_path_buf();
        self
    }
}

/// Parse and validate clearer configuration from YAML content.
pub fn parse_config_content(content: &str) -> Result<ClearerConfig, AppError> {
    let root: Mapping = match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(mapping) => mapping,
        Value::Null => Mapping::new(),
        _ => return Err(AppError::config_error("config.yml must be a mapping")),
    };

    let world_dir = optional_string(&root, "world_dir")?
        .ok_or_else(|| AppError::config_error("config.yml is missing 'world_dir'"))?;
    let working_directory = optional_string(&root, "working_directory")?
        .unwrap_or_else(|| DEFAULT_WORKING_DIRECTORY.to_string());
    let online_api = optional_string(&root, "online_api")?
        .unwrap_or_else(|| DEFAULT_ONLINE_API.to_string());
    let online_api = Url::parse(&online_api)
        .map_err(|e| AppError::config_error(format!("Invalid 'online_api' '{online_api}': {e}")))?;
    let clean_dir =
        optional_string(&root, "clean_dir")?.unwrap_or_else(|| DEFAULT_CLEAN_DIR.to_string());

    let mut categories = Vec::new();
    let mut commands = CommandTemplates::default();

    for (key, value) in &root {
        let Some(name) = key.as_str() else {
            continue;
        };
        let Value::Mapping(table) = value else {
            continue;
        };
        if name == COMMAND_KEY {
            commands = CommandTemplates {
                uuid: string_table(table.get("uuid"), "command.uuid")?,
                playerid: string_table(table.get("playerid"), "command.playerid")?,
            };
        } else {
            categories.push(DataCategory {
                name: name.to_string(),
                paths: string_table(Some(value), name)?,
            });
        }
    }

    Ok(ClearerConfig {
        world_dir,
        working_directory: PathBuf::from(working_directory),
        online_api,
        clean_dir,
        categories,
        commands,
    })
}

fn optional_string(root: &Mapping, key: &str) -> Result<Option<String>, AppError> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(AppError::config_error(format!("'{key}' must be a string"))),
    }
}

/// Read a `key: string` table; an empty or null table yields no entries.
fn string_table(value: Option<&Value>, context: &str) -> Result<Vec<(String, String)>, AppError> {
    let table = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Mapping(table)) => table,
        Some(_) => return Err(AppError::config_error(format!("'{context}' must be a mapping"))),
    };

    table
        .iter()
        .map(|(key, value)| {
            let key = scalar_key(key)
                .ok_or_else(|| AppError::config_error(format!("'{context}' has a non-scalar key")))?;
            let value = value.as_str().ok_or_else(|| {
                AppError::config_error(format!("'{context}.{key}' must be a string"))
            })?;
            Ok((key, value.to_string()))
        })
        .collect()
}

fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
