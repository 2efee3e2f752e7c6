//! Error types for the form controller.

use crate::form::FormId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    /// No form is declared under this identifier
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    /// The form exists but `setup()` has not bound it
    #[error("Form {0} is not set up")]
    NotBound(FormId),

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Field `{field}` must be an integer, got {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// A username that would be resolved out of the request path
    #[error("Username {0:?} cannot be looked up")]
    InvalidUsername(String),

    /// A command-line field that is not `name=value`
    #[error("Malformed field {0:?}, expected name=value")]
    MalformedField(String),

    #[error("Failed to render result: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ControllerError>;
