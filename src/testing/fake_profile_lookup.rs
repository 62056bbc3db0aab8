use crate::domain::AppError;
use crate::ports::{PlayerProfile, ProfileLookup};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct FakeProfileLookup {
    profiles: Vec<(String, String)>,
    unreachable: bool,
    requested: Arc<Mutex<Vec<String>>>,
}

impl FakeProfileLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, name: &str, id: &str) -> Self {
        self.profiles.push((name.to_string(), id.to_string()));
        self
    }

    /// Every lookup fails as if all attempts were exhausted.
    pub fn unreachable() -> Self {
        Self { unreachable: true, ..Self::default() }
    }

    pub fn requested_names(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl ProfileLookup for FakeProfileLookup {
    fn lookup(&self, name: &str) -> Result<PlayerProfile, AppError> {
        self.requested.lock().unwrap().push(name.to_string());
        if self.unreachable {
            return Err(AppError::ResolutionFailed {
                name: name.to_string(),
                attempts: 5,
                details: "connection refused".to_string(),
            });
        }
        self.profiles
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, id)| PlayerProfile { id: id.clone() })
            .ok_or_else(|| AppError::PlayerNotFound(name.to_string()))
    }
}
