//! `!!cpd uuid <uuid>`: clear every configured data file for one UUID.

use tracing::info;

use super::server_templates::run_uuid_templates;
use super::{CommandOutcome, deny};
use crate::app::AppContext;
use crate::domain::PlayerKey;
use crate::ports::{CommandHost, OPERATOR_LEVEL, ProfileLookup, ReplyKind};
use crate::services::delete_all;

pub fn execute<L, H>(ctx: &AppContext<L>, host: &mut H, uuid: &str) -> CommandOutcome
where
    L: ProfileLookup,
    H: CommandHost,
{
    if !host.has_permission(OPERATOR_LEVEL) {
        return deny(host);
    }

    let key = match PlayerKey::new(uuid) {
        Ok(key) => key,
        Err(err) => {
            host.reply(ReplyKind::Failure, &err.to_string());
            return CommandOutcome::Failed;
        }
    };

    run_uuid_templates(&ctx.config().commands, host, &key);

    info!(uuid = %key, "Received player data clear request");

    match delete_all(ctx.config(), &key) {
        Ok(report) => {
            host.reply(
                ReplyKind::Success,
                &format!(
                    "Cleared player data for UUID {} ({} removed), or no data was present",
                    key,
                    report.removed.len()
                ),
            );
            CommandOutcome::Completed
        }
        Err(_) => {
            host.reply(
                ReplyKind::Failure,
                "Failed to clear player data; check the console log for details",
            );
            CommandOutcome::Failed
        }
    }
}
