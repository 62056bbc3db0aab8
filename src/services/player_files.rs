//! Filesystem operations on player data: deletion and stale-file scans.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{error, info, warn};

use crate::domain::{AppError, ClearerConfig, PlayerKey, file_targets};

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Paths touched by a successful [`delete_all`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub removed: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
}

/// Remove every configured data file or directory belonging to `key`.
///
/// Absent targets count as already removed. The first failure aborts the
/// run; targets after it are left untouched.
pub fn delete_all(config: &ClearerConfig, key: &PlayerKey) -> Result<DeleteReport, AppError> {
    let mut report = DeleteReport::default();

    for target in file_targets(config, key) {
        let path = target.path;
        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    category = %target.category,
                    sub_key = %target.sub_key,
                    "Player data not present"
                );
                report.missing.push(path);
                continue;
            }
            Err(source) => {
                error!(path = %path.display(), error = %source, "Failed to inspect player data");
                return Err(AppError::DeletionFailed { path, source });
            }
        };

        let result =
            if metadata.is_dir() { fs::remove_dir_all(&path) } else { fs::remove_file(&path) };

        match result {
            Ok(()) => {
                info!(
                    path = %path.display(),
                    category = %target.category,
                    sub_key = %target.sub_key,
                    "Deleted player data"
                );
                report.removed.push(path);
            }
            Err(source) => {
                error!(path = %path.display(), error = %source, "Failed to delete player data");
                return Err(AppError::DeletionFailed { path, source });
            }
        }
    }

    Ok(report)
}

/// Basenames (last extension stripped) of files in `dir` last modified more
/// than `age_days` days before `now`.
///
/// A missing or unreadable directory yields an empty set.
pub fn find_stale(dir: &Path, age_days: u32, now: SystemTime) -> BTreeSet<String> {
    let threshold = Duration::from_secs(u64::from(age_days) * SECONDS_PER_DAY);

    match scan_stale(dir, threshold, now) {
        Ok(stale) => stale,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %dir.display(), "Player data directory does not exist");
            BTreeSet::new()
        }
        Err(err) => {
            error!(path = %dir.display(), error = %err, "Failed to scan player data directory");
            BTreeSet::new()
        }
    }
}

fn scan_stale(
    dir: &Path,
    threshold: Duration,
    now: SystemTime,
) -> std::io::Result<BTreeSet<String>> {
    let mut stale = BTreeSet::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let metadata = fs::metadata(&path)?;
        if !metadata.is_file() {
            continue;
        }

        let age = now.duration_since(metadata.modified()?).unwrap_or_default();
        if age <= threshold {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            stale.insert(stem.to_string());
        }
    }

    Ok(stale)
}
