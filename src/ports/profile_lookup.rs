//! Profile lookup port definition.

use crate::domain::AppError;

/// Profile returned by the lookup service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    /// Raw `id` field, usually the UUID in simple (undashed) form.
    pub id: String,
}

/// Port for name-to-profile lookups against an identity authority.
pub trait ProfileLookup {
    /// Look up the profile registered for `name`.
    fn lookup(&self, name: &str) -> Result<PlayerProfile, AppError>;
}
