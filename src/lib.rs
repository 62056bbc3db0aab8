//! cpd: clear stored player data from a Minecraft server world.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::commands::{CommandOutcome, dispatch, dispatch_line};
pub use app::identity::{IdentityMode, resolve_uuid};
pub use domain::{AppError, ClearerConfig, CpdCommand, PlayerKey, offline_uuid};
pub use ports::{CommandHost, ProfileLookup, ReplyKind};
pub use services::{DeleteReport, HttpProfileLookup, StdioHost, delete_all, find_stale, load_config};
