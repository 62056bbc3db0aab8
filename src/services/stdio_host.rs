//! Console host: replies on stderr, server commands on stdout.
//!
//! Stdout carries only server commands, one per line, so a wrapper can pipe
//! it straight into the game server console.

use std::io::{self, Write};

use crate::ports::{CommandHost, OPERATOR_LEVEL, ReplyKind};

#[derive(Debug, Clone)]
pub struct StdioHost {
    permission_level: u8,
}

impl StdioHost {
    pub fn new(permission_level: u8) -> Self {
        Self { permission_level }
    }
}

impl Default for StdioHost {
    fn default() -> Self {
        Self::new(OPERATOR_LEVEL)
    }
}

impl CommandHost for StdioHost {
    fn has_permission(&self, level: u8) -> bool {
        self.permission_level >= level
    }

    fn reply(&mut self, kind: ReplyKind, message: &str) {
        let marker = match kind {
            ReplyKind::Success => "✅",
            ReplyKind::Failure => "❌",
            ReplyKind::Info => "ℹ️",
        };
        eprintln!("{} {}", marker, message);
    }

    fn execute_server_command(&mut self, command: &str) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", command);
        let _ = stdout.flush();
    }
}
