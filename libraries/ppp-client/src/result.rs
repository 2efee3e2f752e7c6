//! The normalized outcome of every client operation.

use crate::error::{ClientError, Result};
use crate::operation::Operation;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;

/// Why an operation produced no response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Connection refused, DNS failure and the like
    Unreachable,
    Timeout,
    /// Response body was not valid JSON
    Decode,
    /// Request body could not be serialized
    Encode,
    /// Any other transport error
    Request,
    InvalidUrl,
    /// Form input was missing or malformed; no request was sent
    Validation,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Unreachable => "unreachable",
            FailureKind::Timeout => "timeout",
            FailureKind::Decode => "decode",
            FailureKind::Encode => "encode",
            FailureKind::Request => "request",
            FailureKind::InvalidUrl => "invalid_url",
            FailureKind::Validation => "validation",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Json(Value),
    /// Delete endpoints answer with plain text.
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text),
        }
    }

    /// The payload as a JSON value; text becomes a JSON string.
    pub fn to_value(&self) -> Value {
        match self {
            Payload::Json(value) => value.clone(),
            Payload::Text(text) => Value::String(text.clone()),
        }
    }
}

/// Outcome of a client operation.
///
/// Any HTTP response, whatever its status, is `Ok`: the backend reports
/// application errors in the body and the caller inspects it. `Err` is
/// reserved for requests that produced no usable body at all.
///
/// Serializes as `{"ok": true, "status": 200, "value": ...}` or
/// `{"ok": false, "kind": "unreachable", "message": "...", "detail": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    Ok {
        status: u16,
        payload: Payload,
    },
    Err {
        kind: FailureKind,
        message: String,
        detail: Option<String>,
    },
}

impl ApiResult {
    /// Build a failure result.
    pub fn failure(kind: FailureKind, message: impl Into<String>, detail: Option<String>) -> Self {
        ApiResult::Err {
            kind,
            message: message.into(),
            detail,
        }
    }

    /// Convert an internal error into the failure result of `operation`.
    pub(crate) fn from_error(operation: Operation, err: &ClientError) -> Self {
        ApiResult::failure(
            err.kind(),
            operation.failure_message(),
            Some(err.to_string()),
        )
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResult::Ok { .. })
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiResult::Ok { status, .. } => Some(*status),
            ApiResult::Err { .. } => None,
        }
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            ApiResult::Ok { payload, .. } => Some(payload),
            ApiResult::Err { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ApiResult::Ok { .. } => None,
            ApiResult::Err { kind, .. } => Some(*kind),
        }
    }

    /// Decode the payload into a typed record such as [`User`](crate::User)
    /// or `Vec<Album>`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        match self {
            ApiResult::Ok { payload, .. } => serde_json::from_value(payload.to_value())
                .map_err(|e| ClientError::ParseError(format!("Failed to decode payload: {}", e))),
            ApiResult::Err { kind, message, .. } => Err(ClientError::Failed {
                kind: *kind,
                message: message.clone(),
            }),
        }
    }

    /// The value the legacy page displayed: the bare body on success and
    /// `{"error": message}` on failure.
    pub fn legacy_value(&self) -> Value {
        match self {
            ApiResult::Ok { payload, .. } => payload.to_value(),
            ApiResult::Err { message, .. } => json!({ "error": message }),
        }
    }
}

impl Serialize for ApiResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ApiResult::Ok { status, payload } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("status", status)?;
                map.serialize_entry("value", payload)?;
                map.end()
            }
            ApiResult::Err {
                kind,
                message,
                detail,
            } => {
                let len = if detail.is_some() { 4 } else { 3 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("kind", kind)?;
                map.serialize_entry("message", message)?;
                if let Some(detail) = detail {
                    map.serialize_entry("detail", detail)?;
                }
                map.end()
            }
        }
    }
}
