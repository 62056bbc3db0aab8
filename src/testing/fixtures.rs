use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::parse_config_content;
use crate::ports::ProfileLookup;

pub const TEST_CONFIG: &str = r#"
world_dir: world
dat:
  playerdata: playerdata
json:
  stats: stats
file:
  backups: backups
command:
  uuid:
    log: "unused <uuid>"
  playerid:
    kick: "kick <playerid>"
    log: "say clearing <uuid> <playerid>"
"#;

/// Context over [`TEST_CONFIG`] rooted at `root`.
pub fn context_in<L: ProfileLookup>(root: &Path, lookup: L) -> AppContext<L> {
    context_with(root, TEST_CONFIG, lookup)
}

fn context_with<L: ProfileLookup>(root: &Path, yaml: &str, lookup: L) -> AppContext<L> {
    let config = parse_config_content(yaml).unwrap().with_working_directory(root);
    AppContext::new(config, lookup)
}

/// Create a file (and its parent directories) under `root`.
pub fn write_file(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"data").unwrap();
}
