//! Types for PPP API requests and responses.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub type UserId = i64;
pub type AlbumId = i64;

/// Configuration for connecting to the PPP backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:8080")
    pub url: String,
    /// Overall request timeout; requests wait indefinitely when unset
    pub timeout: Option<Duration>,
    /// Connection establishment timeout
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
            connect_timeout: None,
            user_agent: format!("ppp-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// Resource Types
// =============================================================================

/// A user record. Every field is optional; the backend enforces what it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the backend on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    /// A new user with credentials and no id.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: None,
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

/// An album record, owned by exactly one user.
///
/// The owner's id is not part of the record: it travels in the path when
/// the album is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<AlbumId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_count: Option<i64>,
    /// Total running time, in the unit the backend stores
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_time: Option<i64>,
}
