use std::io::{self, BufRead};

use tracing::debug;

use crate::app::AppContext;
use crate::app::commands::dispatch_line;
use crate::domain::AppError;
use crate::ports::{CommandHost, ProfileLookup};

/// Handle `!!cpd` lines from stdin until end of input, one at a time.
pub fn run_console<L, H>(ctx: &AppContext<L>, host: &mut H) -> Result<(), AppError>
where
    L: ProfileLookup,
    H: CommandHost,
{
    for line in io::stdin().lock().lines() {
        let line = line?;
        if let Some(outcome) = dispatch_line(ctx, host, &line) {
            debug!(command = %line.trim(), ?outcome, "Console command finished");
        }
    }
    Ok(())
}
