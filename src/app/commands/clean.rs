//! `!!cpd clean <days> [confirm]`: clear players whose data went stale.

use std::time::SystemTime;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::info;

use super::{CommandOutcome, delete_uuid, deny};
use crate::app::AppContext;
use crate::ports::{CommandHost, OPERATOR_LEVEL, ProfileLookup, ReplyKind};
use crate::services::find_stale;

/// Propose a clean, or run it when `confirm` is set.
pub fn execute<L, H>(
    ctx: &AppContext<L>,
    host: &mut H,
    days: u32,
    confirm: bool,
    now: SystemTime,
) -> CommandOutcome
where
    L: ProfileLookup,
    H: CommandHost,
{
    if !host.has_permission(OPERATOR_LEVEL) {
        return deny(host);
    }

    if !confirm {
        host.reply(
            ReplyKind::Info,
            &format!(
                "Confirm clearing player data not modified for {} day(s) (before {}) by entering: !!cpd clean {} confirm",
                days,
                cutoff_label(days, now),
                days
            ),
        );
        return CommandOutcome::AwaitingConfirmation;
    }

    let stale = find_stale(&ctx.config().clean_path(), days, now);
    if stale.is_empty() {
        host.reply(
            ReplyKind::Info,
            &format!(
                "No player data unmodified for {} day(s) was found, or the scan failed; check the console log for details",
                days
            ),
        );
        return CommandOutcome::NothingToClean;
    }

    info!(count = stale.len(), days, "Clearing stale player data");

    let mut failed = 0usize;
    for key in &stale {
        if !delete_uuid::execute(ctx, host, key).is_success() {
            failed += 1;
        }
    }

    if failed == 0 {
        host.reply(ReplyKind::Success, &format!("Cleaned {} stale player(s)", stale.len()));
        CommandOutcome::Completed
    } else {
        host.reply(
            ReplyKind::Failure,
            &format!("Cleaned {} of {} stale player(s)", stale.len() - failed, stale.len()),
        );
        CommandOutcome::Failed
    }
}

/// Cut-off shown in the proposal. Falls back to a fixed label once the
/// date would leave chrono's representable range.
fn cutoff_label(days: u32, now: SystemTime) -> String {
    TimeDelta::try_days(i64::from(days))
        .and_then(|age| DateTime::<Utc>::from(now).checked_sub_signed(age))
        .map(|cutoff| cutoff.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "the beginning of time".to_string())
}
