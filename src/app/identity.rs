//! Name to UUID resolution, online or offline depending on the server.

use tracing::debug;
use uuid::Uuid;

use crate::app::AppContext;
use crate::domain::{AppError, offline_uuid, parse_uuid};
use crate::ports::ProfileLookup;
use crate::services::read_online_mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityMode {
    /// Identities are verified by the profile service.
    Online,
    /// Identities are derived locally from the player name.
    Offline,
}

/// Identity mode configured in the server's `server.properties`.
pub fn identity_mode<L: ProfileLookup>(ctx: &AppContext<L>) -> IdentityMode {
    if read_online_mode(&ctx.config().server_properties_path()) {
        IdentityMode::Online
    } else {
        IdentityMode::Offline
    }
}

/// Resolve `name` to the UUID the server uses for that player.
pub fn resolve_uuid<L: ProfileLookup>(ctx: &AppContext<L>, name: &str) -> Result<Uuid, AppError> {
    let mode = identity_mode(ctx);
    debug!(player = name, ?mode, "Resolving player UUID");

    match mode {
        IdentityMode::Online => {
            let profile = ctx.lookup().lookup(name)?;
            parse_uuid(&profile.id)
        }
        IdentityMode::Offline => Ok(offline_uuid(name)),
    }
}
