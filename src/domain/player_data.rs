//! Mapping a player key to its on-disk data across configured categories.

use std::path::PathBuf;

use super::config::ClearerConfig;
use super::player::PlayerKey;

/// A file or directory that may hold one player's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    pub category: String,
    pub sub_key: String,
    pub path: PathBuf,
}

/// Every candidate path for `key`, in category then sub-key order.
///
/// Paths are `working_directory/world_dir/<category path>/<entry name>`.
pub fn file_targets(config: &ClearerConfig, key: &PlayerKey) -> Vec<FileTarget> {
    let world = config.world_path();
    config
        .categories
        .iter()
        .flat_map(|category| {
            let entry = category.entry_name(key);
            let world = &world;
            category.paths.iter().map(move |(sub_key, relative)| FileTarget {
                category: category.name.clone(),
                sub_key: sub_key.clone(),
                path: world.join(relative).join(&entry),
            })
        })
        .collect()
}
