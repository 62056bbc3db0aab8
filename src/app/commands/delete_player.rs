//! `!!cpd playerid <name>`: resolve a player name, then clear by UUID.

use tracing::{error, info};

use super::server_templates::run_playerid_templates;
use super::{CommandOutcome, delete_uuid, deny};
use crate::app::AppContext;
use crate::app::identity::resolve_uuid;
use crate::ports::{CommandHost, OPERATOR_LEVEL, ProfileLookup, ReplyKind};

pub fn execute<L, H>(ctx: &AppContext<L>, host: &mut H, name: &str) -> CommandOutcome
where
    L: ProfileLookup,
    H: CommandHost,
{
    if !host.has_permission(OPERATOR_LEVEL) {
        return deny(host);
    }

    run_playerid_templates(&ctx.config().commands, host, name);

    match resolve_uuid(ctx, name) {
        Ok(uuid) => {
            info!(player = name, uuid = %uuid, "Resolved player UUID");
            delete_uuid::execute(ctx, host, &uuid.hyphenated().to_string())
        }
        Err(err) => {
            error!(player = name, error = %err, "Failed to resolve player UUID");
            host.reply(ReplyKind::Failure, &format!("Could not resolve a UUID for {}: {}", name, err));
            CommandOutcome::Failed
        }
    }
}
