//! `!!cpd` command-line grammar.

use super::AppError;

pub const COMMAND_PREFIX: &str = "!!cpd";

/// Help entries as `(usage, description)`.
pub const HELP_ENTRIES: [(&str, &str); 3] = [
    ("!!cpd uuid <uuid>", "Clear data of the player with this UUID"),
    ("!!cpd playerid <playerid>", "Clear data of the named player"),
    ("!!cpd clean <day>", "Clear player data not modified for this many days"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpdCommand {
    Help,
    Uuid(String),
    PlayerId(String),
    Clean { days: u32, confirm: bool },
}

impl CpdCommand {
    /// Parse a console line. Lines not addressed to `!!cpd` yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some(COMMAND_PREFIX) {
            return Ok(None);
        }
        let args: Vec<&str> = tokens.collect();

        let command = match args.as_slice() {
            [] => CpdCommand::Help,
            ["uuid", value] => CpdCommand::Uuid(value.to_string()),
            ["uuid", ..] => return Err(usage("!!cpd uuid <uuid>")),
            ["playerid", value] => CpdCommand::PlayerId(value.to_string()),
            ["playerid", ..] => return Err(usage("!!cpd playerid <playerid>")),
            ["clean", days] => CpdCommand::Clean { days: parse_days(days)?, confirm: false },
            ["clean", days, "confirm"] => {
                CpdCommand::Clean { days: parse_days(days)?, confirm: true }
            }
            ["clean", ..] => return Err(usage("!!cpd clean <day> [confirm]")),
            _ => CpdCommand::Help,
        };
        Ok(Some(command))
    }
}

pub fn help_text() -> String {
    HELP_ENTRIES
        .iter()
        .map(|(usage, description)| format!("{usage}  {description}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_days(value: &str) -> Result<u32, AppError> {
    value.parse::<u32>().map_err(|_| {
        AppError::Usage(format!("Invalid day count '{value}': expected a non-negative integer"))
    })
}

fn usage(expected: &str) -> AppError {
    AppError::Usage(format!("Usage: {expected}"))
}
