//! Administrator-configured server commands run before deletion.

use tracing::{info, warn};

use crate::domain::config::{PLAYERID_PLACEHOLDER, UUID_PLACEHOLDER};
use crate::domain::{CommandTemplates, PlayerKey};
use crate::ports::CommandHost;

/// Run the `command.uuid` triggers for `key`.
///
/// Each trigger name is looked up in the `command.playerid` table; the
/// `command.uuid` values themselves are never read. Triggers with no
/// `playerid` counterpart are skipped.
pub fn run_uuid_templates<H: CommandHost>(templates: &CommandTemplates, host: &mut H, key: &PlayerKey) {
    for (trigger, _) in &templates.uuid {
        match templates.playerid_template(trigger) {
            Some(template) => {
                let command = template.replace(UUID_PLACEHOLDER, key.as_str());
                info!(trigger = %trigger, command = %command, "Running server command");
                host.execute_server_command(&command);
            }
            None => {
                warn!(trigger = %trigger, "No command.playerid entry for uuid trigger; skipping");
            }
        }
    }
}

/// Run every `command.playerid` template for `name`.
pub fn run_playerid_templates<H: CommandHost>(templates: &CommandTemplates, host: &mut H, name: &str) {
    for (trigger, template) in &templates.playerid {
        let command = template.replace(PLAYERID_PLACEHOLDER, name);
        info!(trigger = %trigger, command = %command, "Running server command");
        host.execute_server_command(&command);
    }
}
