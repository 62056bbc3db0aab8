//! Host capability port: where commands come from and where replies go.

/// Permission level of a server operator (console or op level 4).
pub const OPERATOR_LEVEL: u8 = 4;

/// Tone of a reply shown to the command source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Success,
    Failure,
    Info,
}

/// Port for the environment that issued a command.
pub trait CommandHost {
    /// Whether the command source holds at least `level`.
    fn has_permission(&self, level: u8) -> bool;

    /// Send a message back to the command source.
    fn reply(&mut self, kind: ReplyKind, message: &str);

    /// Run a command on the game server console.
    fn execute_server_command(&mut self, command: &str);
}
