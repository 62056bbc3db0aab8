use crate::domain::ClearerConfig;
use crate::ports::ProfileLookup;

/// Application context holding dependencies for command execution.
pub struct AppContext<L: ProfileLookup> {
    config: ClearerConfig,
    lookup: L,
}

impl<L: ProfileLookup> AppContext<L> {
    /// Create a new application context.
    pub fn new(config: ClearerConfig, lookup: L) -> Self {
        Self { config, lookup }
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &ClearerConfig {
        &self.config
    }

    /// Get a reference to the profile lookup client.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}
