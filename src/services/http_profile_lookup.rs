//! Profile lookup client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::domain::AppError;
use crate::ports::{PlayerProfile, ProfileLookup};

/// Attempts made per lookup before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP client for a `GET {api_url}{name}` profile endpoint.
#[derive(Debug, Clone)]
pub struct HttpProfileLookup {
    api_url: Url,
    max_attempts: u32,
    client: Client,
}

impl HttpProfileLookup {
    pub fn new(api_url: Url) -> Result<Self, AppError> {
        Self::with_policy(api_url, DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with an explicit attempt budget and per-request timeout.
    pub fn with_policy(api_url: Url, max_attempts: u32, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url, max_attempts, client })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    id: String,
}

/// Outcome of a single failed attempt.
enum AttemptError {
    Retryable(String),
    NotFound,
    Fatal(String),
}

impl ProfileLookup for HttpProfileLookup {
    fn lookup(&self, name: &str) -> Result<PlayerProfile, AppError> {
        let url = self.profile_url(name)?;

        let max_attempts = self.max_attempts.max(1);
        let mut last_error = String::new();

        for attempt in 1..=max_attempts {
            match self.send_request(&url) {
                Ok(profile) => return Ok(profile),
                Err(AttemptError::NotFound) => return Err(AppError::PlayerNotFound(name.to_string())),
                Err(AttemptError::Fatal(details)) => {
                    return Err(AppError::ResolutionFailed {
                        name: name.to_string(),
                        attempts: attempt,
                        details,
                    });
                }
                Err(AttemptError::Retryable(details)) => {
                    warn!(player = name, attempt, max_attempts, error = %details, "Profile lookup failed");
                    last_error = details;
                }
            }
        }

        Err(AppError::ResolutionFailed {
            name: name.to_string(),
            attempts: max_attempts,
            details: last_error,
        })
    }
}

impl HttpProfileLookup {
    /// `api_url` with `name` appended as one percent-encoded path segment.
    fn profile_url(&self, name: &str) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Configuration(format!("Lookup URL '{}' cannot take a path", self.api_url))
            })?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }

    fn send_request(&self, url: &Url) -> Result<PlayerProfile, AttemptError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| AttemptError::Retryable(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND {
            return Err(AttemptError::NotFound);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AttemptError::Retryable("Rate limited (429)".into()));
        }
        if status.is_server_error() {
            return Err(AttemptError::Retryable(format!("Server error ({})", status.as_u16())));
        }
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AttemptError::Fatal(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let body = response
            .text()
            .map_err(|e| AttemptError::Retryable(format!("Failed to read response: {}", e)))?;
        let api_response: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| AttemptError::Retryable(format!("Failed to parse response: {}", e)))?;

        Ok(PlayerProfile { id: api_response.id })
    }
}
