use crate::ports::{CommandHost, OPERATOR_LEVEL, ReplyKind};

/// Host that records replies and server commands instead of emitting them.
pub struct RecordingHost {
    pub permission_level: u8,
    pub replies: Vec<(ReplyKind, String)>,
    pub server_commands: Vec<String>,
}

impl RecordingHost {
    pub fn operator() -> Self {
        Self::with_level(OPERATOR_LEVEL)
    }

    pub fn with_level(permission_level: u8) -> Self {
        Self { permission_level, replies: Vec::new(), server_commands: Vec::new() }
    }

    pub fn replied_with(&self, kind: ReplyKind, fragment: &str) -> bool {
        self.replies.iter().any(|(k, text)| *k == kind && text.contains(fragment))
    }
}

impl CommandHost for RecordingHost {
    fn has_permission(&self, level: u8) -> bool {
        self.permission_level >= level
    }

    fn reply(&mut self, kind: ReplyKind, message: &str) {
        self.replies.push((kind, message.to_string()));
    }

    fn execute_server_command(&mut self, command: &str) {
        self.server_commands.push(command.to_string());
    }
}
