//! Normalization of raw model output into JSON.

use serde_json::Value;

use crate::errors::AppError;

/// Strips a ```json ... ``` or ``` ... ``` code fence from LLM output.
/// Text without a leading fence is only trimmed.
pub fn strip_json_fence(text: &str) -> &str {
    let text = text.trim();
    if !text.starts_with("```") {
        return text;
    }

    let inner = text.trim_matches('`');
    inner.strip_prefix("json").unwrap_or(inner).trim()
}

/// Parses the model's completion as JSON after fence-stripping.
///
/// The parsed structure is not checked against the item schema. On failure
/// the error carries the raw completion, not the stripped text.
pub fn parse_model_output(raw: &str) -> Result<Value, AppError> {
    serde_json::from_str(strip_json_fence(raw)).map_err(|_| AppError::InvalidModelOutput {
        raw: raw.to_string(),
    })
}
