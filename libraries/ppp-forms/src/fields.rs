//! Extracting path parameters from submitted records.

use crate::error::{ControllerError, Result};
use crate::form::Record;
use ppp_client::{AlbumId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Owner id used for a missing `userId` under [`FieldPolicy::Defaults`].
pub const DEFAULT_USER_ID: UserId = 1;
/// Album id used for a missing `albumId` under [`FieldPolicy::Defaults`].
pub const DEFAULT_ALBUM_ID: AlbumId = 0;

/// What happens when a form omits a field its operation needs in the path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPolicy {
    /// Fail with a validation error naming the field.
    #[default]
    Strict,
    /// Fall back to [`DEFAULT_USER_ID`] and [`DEFAULT_ALBUM_ID`].
    /// `username` has no default.
    Defaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdField {
    UserId,
    AlbumId,
}

impl IdField {
    pub(crate) fn name(self) -> &'static str {
        match self {
            IdField::UserId => "userId",
            IdField::AlbumId => "albumId",
        }
    }

    fn default_value(self) -> i64 {
        match self {
            IdField::UserId => DEFAULT_USER_ID,
            IdField::AlbumId => DEFAULT_ALBUM_ID,
        }
    }
}

/// A field's value, treating blank inputs as absent.
fn present<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
    match record.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(value) => Some(value),
    }
}

impl FieldPolicy {
    pub(crate) fn id(self, record: &Record, field: IdField) -> Result<i64> {
        let Some(value) = present(record, field.name()) else {
            return match self {
                FieldPolicy::Strict => Err(ControllerError::MissingField(field.name())),
                FieldPolicy::Defaults => Ok(field.default_value()),
            };
        };

        let parsed = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| ControllerError::InvalidField {
            field: field.name(),
            value: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })
    }

    pub(crate) fn username(self, record: &Record) -> Result<String> {
        let username = match present(record, "username") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => return Err(ControllerError::MissingField("username")),
        };

        // Dot segments collapse the lookup path onto the listing endpoint
        if matches!(username.as_str(), "." | "..") {
            return Err(ControllerError::InvalidUsername(username));
        }
        Ok(username)
    }
}

/// A free-text field, empty when absent.
pub(crate) fn text_or_empty(record: &Record, name: &str) -> String {
    match record.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
