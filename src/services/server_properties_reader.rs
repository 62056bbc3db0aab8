//! Reading the identity mode from `server.properties`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{error, warn};

use crate::domain::parse_online_mode;

/// Whether the server verifies identities online.
///
/// Falls back to `true` when the file is missing, unreadable, or has no
/// `online-mode` entry.
pub fn read_online_mode(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(content) => parse_online_mode(&content).unwrap_or_else(|| {
            warn!(path = %path.display(), "No online-mode entry; assuming online");
            true
        }),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            error!(path = %path.display(), "server.properties not found; assuming online");
            true
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "Failed to read server.properties; assuming online");
            true
        }
    }
}
