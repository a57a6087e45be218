//! Normalization of generative-service output into parseable JSON text.
//!
//! Models are asked to "return ONLY JSON" but wrap it in code fences, quote
//! keys with single quotes, emit Python booleans or surround the payload with
//! commentary. [`normalize`] runs an ordered pipeline of cheap repairs and
//! tags the result so callers can tell genuine data from a placeholder.

pub mod stages;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

pub use stages::{
    extract_json_span, lowercase_booleans, quote_single_keys, recover_feedback, strip_backticks,
    strip_code_fence,
};

/// Message carried by the default fallback object
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Unable to process response. Please try again.";

/// Outcome of normalizing a completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// The cleaned text parsed as JSON
    Clean(String),
    /// Parsing failed but a feedback string was salvaged into a fallback object
    Recovered { text: String, feedback: String },
    /// Nothing usable: a fixed fallback object (`{}` for empty input)
    Fallback(String),
}

impl Normalized {
    /// JSON text of the result, whichever outcome produced it
    pub fn as_str(&self) -> &str {
        match self {
            Normalized::Clean(text) | Normalized::Fallback(text) => text,
            Normalized::Recovered { text, .. } => text,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Normalized::Clean(text) | Normalized::Fallback(text) => text,
            Normalized::Recovered { text, .. } => text,
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Normalized::Clean(_))
    }

    /// True when the text is a placeholder rather than model output
    pub fn is_fallback(&self) -> bool {
        !self.is_clean()
    }

    /// Feedback salvaged from an unparseable completion
    pub fn feedback(&self) -> Option<&str> {
        match self {
            Normalized::Recovered { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::from_str(self.as_str())
    }

    /// Deserialize the JSON text into a typed structure
    pub fn deserialize<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.as_str())
    }
}

/// Normalize raw completion text. Never fails; failure is encoded in the
/// returned variant.
///
/// Only an object or array counts as clean output. A completion that is a bare
/// scalar (`42`, `"text"`) goes through the repair stages like any other text.
pub fn normalize(raw: &str) -> Normalized {
    if raw.is_empty() {
        return Normalized::Fallback("{}".to_string());
    }
    let trimmed = raw.trim();
    if parses(trimmed) {
        return Normalized::Clean(trimmed.to_string());
    }

    let cleaned = strip_code_fence(trimmed);
    let cleaned = strip_backticks(&cleaned);
    let cleaned = match extract_json_span(&cleaned) {
        Some(span) => span.to_string(),
        None => cleaned,
    };
    if parses(&cleaned) {
        return Normalized::Clean(cleaned);
    }

    let cleaned = lowercase_booleans(&quote_single_keys(&cleaned));
    if parses(&cleaned) {
        return Normalized::Clean(cleaned);
    }

    warn!("Failed to parse completion as JSON after cleaning");
    debug!("Raw input: {}", raw);
    debug!("Cleaned output: {}", cleaned);

    match recover_feedback(&cleaned) {
        Some(feedback) => Normalized::Recovered {
            text: fallback_object(&feedback),
            feedback,
        },
        None => Normalized::Fallback(fallback_object(DEFAULT_FALLBACK_MESSAGE)),
    }
}

/// Normalize and return only the JSON text
pub fn normalize_text(raw: &str) -> String {
    normalize(raw).into_string()
}

/// True when the text is a JSON object or array
fn parses(text: &str) -> bool {
    matches!(
        serde_json::from_str::<Value>(text),
        Ok(Value::Object(_) | Value::Array(_))
    )
}

fn fallback_object(feedback: &str) -> String {
    json!({ "correct": false, "feedback": feedback }).to_string()
}
