//! Turning results into the text shown under a form.

use crate::error::Result;
use ppp_client::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

/// How a result is written into a form's output element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// The whole tagged result: `ok`, `status`, `value` or `kind`, `message`.
    #[default]
    Tagged,
    /// Only the response body, or `{"error": message}` on failure.
    Legacy,
}

/// Pretty JSON with four-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render(result: &ApiResult, style: OutputStyle) -> Result<String> {
    match style {
        OutputStyle::Tagged => to_pretty_json(result),
        OutputStyle::Legacy => to_pretty_json(&result.legacy_value()),
    }
}
