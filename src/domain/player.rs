//! Player identities: validated path keys and UUID derivation.

use std::fmt;

use md5::{Digest, Md5};
use uuid::{Builder, Uuid};

use super::AppError;
use super::validation::validate_player_key;

/// Prefix hashed together with the name to derive an offline-mode UUID.
pub const OFFLINE_PLAYER_PREFIX: &str = "OfflinePlayer:";

/// A validated identity used to build per-player file names.
///
/// Guarantees:
/// - Non-empty
/// - No path traversal components (/, \, ., ..)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerKey(String);

impl PlayerKey {
    pub fn new(key: &str) -> Result<Self, AppError> {
        if !validate_player_key(key) {
            return Err(AppError::InvalidPlayerKey(key.to_string()));
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for PlayerKey {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the UUID a server in offline mode assigns to `name`.
///
/// MD5 over `"OfflinePlayer:" + name`, with the version nibble forced to 3
/// and the RFC 4122 variant bits set.
pub fn offline_uuid(name: &str) -> Uuid {
    let digest = Md5::digest(format!("{OFFLINE_PLAYER_PREFIX}{name}").as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);
    Builder::from_md5_bytes(bytes).into_uuid()
}

/// Parse a UUID given in simple (`069a79f4...`) or hyphenated form.
pub fn parse_uuid(text: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(text.trim()).map_err(|_| AppError::InvalidUuid(text.to_string()))
}
