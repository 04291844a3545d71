use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Metadata;

pub const NOT_AVAILABLE: &str = "N/A";

/// One catalog entry. Every field may be missing in the source data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Kept raw; only the literal `true` marks a book as available.
    #[serde(rename = "isAvailable", default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<Value>,
}

impl Book {
    /// Decodes any JSON value into a record. Non-objects become a record with every field missing.
    pub fn from_value(value: Value) -> Book {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Book::default(),
        }
    }

    pub fn text(&self, metadata: Metadata) -> Option<&str> {
        match metadata {
            Metadata::Title => self.title.as_deref(),
            Metadata::Author => self.author.as_deref(),
            Metadata::Genre => self.genre.as_deref(),
            Metadata::Status => Some(self.status()),
        }
    }

    /// Cell text for `metadata`, with the `N/A` placeholder for missing fields.
    pub fn display(&self, metadata: Metadata) -> &str {
        self.text(metadata).unwrap_or(NOT_AVAILABLE)
    }

    pub fn is_available(&self) -> bool {
        matches!(self.is_available, Some(Value::Bool(true)))
    }

    pub fn status(&self) -> &'static str {
        if self.is_available() {
            "Available"
        } else {
            "Check Out"
        }
    }
}

/// Strings and non-zero numbers are text; empty strings, zero, `null`, `false` and containers
/// are missing.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let text = match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some(String::from("true")),
        _ => None,
    };

    Ok(text)
}
