mod command_host;
mod profile_lookup;

pub use command_host::{CommandHost, OPERATOR_LEVEL, ReplyKind};
pub use profile_lookup::{PlayerProfile, ProfileLookup};
