//! Permission-gated `!!cpd` command handlers.
//!
//! Handlers report a [`CommandOutcome`] and never return errors: every
//! failure is logged and answered with a reply to the command source.

pub mod clean;
pub mod delete_player;
pub mod delete_uuid;
pub mod server_templates;

use std::time::SystemTime;

use crate::app::AppContext;
use crate::domain::{CpdCommand, help_text};
use crate::ports::{CommandHost, ProfileLookup, ReplyKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Player data was cleared (or was already absent).
    Completed,
    /// A deletion, resolution, or argument error was reported to the source.
    Failed,
    PermissionDenied,
    /// A bulk clean was proposed and awaits `confirm`.
    AwaitingConfirmation,
    /// A confirmed bulk clean found no stale data.
    NothingToClean,
    Help,
}

impl CommandOutcome {
    pub fn is_success(self) -> bool {
        !matches!(self, CommandOutcome::Failed | CommandOutcome::PermissionDenied)
    }

    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Run a parsed command to completion.
pub fn dispatch<L, H>(ctx: &AppContext<L>, host: &mut H, command: CpdCommand) -> CommandOutcome
where
    L: ProfileLookup,
    H: CommandHost,
{
    match command {
        CpdCommand::Help => {
            host.reply(ReplyKind::Info, &help_text());
            CommandOutcome::Help
        }
        CpdCommand::Uuid(uuid) => delete_uuid::execute(ctx, host, &uuid),
        CpdCommand::PlayerId(name) => delete_player::execute(ctx, host, &name),
        CpdCommand::Clean { days, confirm } => {
            clean::execute(ctx, host, days, confirm, SystemTime::now())
        }
    }
}

/// Parse and run one console line. Lines not addressed to `!!cpd` yield `None`.
pub fn dispatch_line<L, H>(ctx: &AppContext<L>, host: &mut H, line: &str) -> Option<CommandOutcome>
where
    L: ProfileLookup,
    H: CommandHost,
{
    match CpdCommand::parse(line) {
        Ok(None) => None,
        Ok(Some(command)) => Some(dispatch(ctx, host, command)),
        Err(err) => {
            host.reply(ReplyKind::Failure, &err.to_string());
            Some(CommandOutcome::Failed)
        }
    }
}

pub(crate) fn deny<H: CommandHost>(host: &mut H) -> CommandOutcome {
    host.reply(ReplyKind::Failure, "You do not have permission to run this command");
    CommandOutcome::PermissionDenied
}
