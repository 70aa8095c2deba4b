//! Recovery of usable values from raw model completions.
//!
//! Model output is never trusted to be clean: a completion that should be a
//! JSON object may arrive wrapped in markdown code fences, prefixed with
//! conversational filler ("Sure, here you go:"), or both. This module turns
//! that blob into either a parsed JSON object or plain cleaned text, and is
//! the only place in the crate that does so.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// How a completion should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverMode {
    /// The completion must contain a JSON object. Prose outside the
    /// outermost braces is discarded before parsing.
    Object,
    /// The completion is free text. Only fence markers are stripped;
    /// braces inside the text (e.g. in code samples) are kept intact.
    Text,
}

/// A cleaned completion: a parsed JSON object or plain text.
/// Serializes untagged, so handlers can embed it directly in a response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecoveredValue {
    Object(Map<String, Value>),
    Text(String),
}

impl RecoveredValue {
    /// The cleaned text, for completions recovered in text mode.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RecoveredValue::Text(text) => Some(text),
            RecoveredValue::Object(_) => None,
        }
    }
}

/// Object-mode recovery failed: the completion held no parseable object.
/// Always caused by the upstream model, never by a caller bug. The carried
/// content is for logs only and must not be echoed to end users.
#[derive(Debug, Error)]
pub enum MalformedContentError {
    #[error("no JSON object found in completion")]
    MissingObject { content: String },

    #[error("completion is not valid JSON: {source}")]
    InvalidJson {
        source: serde_json::Error,
        content: String,
    },
}

/// Recovers a structured object or cleaned text from a raw completion.
///
/// Text mode never fails. Object mode fails with [`MalformedContentError`]
/// when no balanced `{...}` span exists or the span does not parse; callers
/// surface that as a 500-class error without attempting partial recovery.
pub fn recover(raw: &str, mode: RecoverMode) -> Result<RecoveredValue, MalformedContentError> {
    let cleaned = strip_fences(raw);
    match mode {
        RecoverMode::Text => Ok(RecoveredValue::Text(cleaned)),
        RecoverMode::Object => {
            let span = match (cleaned.find('{'), cleaned.rfind('}')) {
                (Some(start), Some(end)) if end > start => &cleaned[start..=end],
                _ => return Err(MalformedContentError::MissingObject { content: cleaned }),
            };
            match serde_json::from_str::<Map<String, Value>>(span) {
                Ok(object) => Ok(RecoveredValue::Object(object)),
                Err(source) => Err(MalformedContentError::InvalidJson {
                    source,
                    content: span.to_string(),
                }),
            }
        }
    }
}

/// Strips markdown code fences (```lang ... ```) or single-backtick wrapping
/// from a completion, returning the trimmed interior.
fn strip_fences(raw: &str) -> String {
    let text = raw.trim();

    if text.starts_with("```") {
        if let Some(newline) = text.find('\n') {
            // Drop the opening line (which may carry a language tag) and the
            // trailing fence line, keep the interior.
            let interior = text[newline + 1..].trim_end();
            let interior = interior.strip_suffix("```").unwrap_or(interior);
            return interior.trim().to_string();
        }
        // Fence with no line of its own: cut exactly three characters from
        // each end. Known sharp edge: a short unfenced reply that happens
        // to start with three backticks gets mangled the same way.
        let mut chars = text.chars();
        for _ in 0..3 {
            chars.next();
            chars.next_back();
        }
        return chars.as_str().trim().to_string();
    }

    if text.len() >= 2 && text.starts_with('`') && text.ends_with('`') {
        return text[1..text.len() - 1].trim().to_string();
    }

    text.to_string()
}
