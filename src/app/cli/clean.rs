use std::io::IsTerminal;
use std::time::SystemTime;

use dialoguer::Confirm;

use crate::app::AppContext;
use crate::app::commands::{CommandOutcome, clean};
use crate::domain::AppError;
use crate::ports::{CommandHost, ProfileLookup};

/// Propose a clean; on an interactive terminal, ask before running it.
pub fn run_clean<L, H>(
    ctx: &AppContext<L>,
    host: &mut H,
    days: u32,
    confirm: bool,
) -> Result<CommandOutcome, AppError>
where
    L: ProfileLookup,
    H: CommandHost,
{
    let now = SystemTime::now();
    let outcome = clean::execute(ctx, host, days, confirm, now);
    if outcome != CommandOutcome::AwaitingConfirmation || !std::io::stdin().is_terminal() {
        return Ok(outcome);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete data of players inactive for {} day(s)?", days))
        .default(false)
        .interact()
        .map_err(|err| AppError::Configuration(format!("Failed to read confirmation: {}", err)))?;

    if confirmed { Ok(clean::execute(ctx, host, days, true, now)) } else { Ok(outcome) }
}
