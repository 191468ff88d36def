use serde::Deserialize;
use serde_json::Value;

use taveren_core::model::Message;

/// The layout of an export, decided once from the raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportShape {
    /// A JSON object with a `messages` array (ChatGPT conversation export).
    Threaded(Vec<Value>),
    /// A JSON array of `{role, content}` objects.
    Flat(Vec<Value>),
    /// Anything else, including text that is not JSON at all.
    PlainText,
}

/// Fields are kept loose so one mistyped field does not hide a usable
/// fallback in another.
#[derive(Debug, Deserialize)]
struct ThreadedEntry {
    #[serde(default)]
    author: Value,
    #[serde(default)]
    role: Value,
    #[serde(default)]
    content: Value,
}

#[derive(Debug, Deserialize)]
struct FlatEntry {
    #[serde(default)]
    role: Value,
    #[serde(default)]
    content: Value,
}

impl ExportShape {
    pub fn classify(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(mut obj)) => match obj.remove("messages") {
                Some(Value::Array(entries)) => Self::Threaded(entries),
                _ => Self::PlainText,
            },
            Ok(Value::Array(entries)) => Self::Flat(entries),
            Ok(_) => Self::PlainText,
            Err(e) => {
                tracing::debug!("Input is not JSON, treating as plain text: {e}");
                Self::PlainText
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Threaded(_) => "threaded",
            Self::Flat(_) => "flat",
            Self::PlainText => "plain-text",
        }
    }

    /// Extract messages from a JSON shape. `PlainText` yields nothing here;
    /// line parsing is handled by the caller.
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Self::Threaded(entries) => entries.into_iter().filter_map(threaded_message).collect(),
            Self::Flat(entries) => entries.into_iter().filter_map(flat_message).collect(),
            Self::PlainText => Vec::new(),
        }
    }
}

fn threaded_message(raw: Value) -> Option<Message> {
    let entry: ThreadedEntry = match serde_json::from_value(raw) {
        Ok(entry) => entry,
        Err(e) => {
            tracing::debug!("Skipping malformed export entry: {e}");
            return None;
        }
    };

    let role = entry
        .author
        .get("role")
        .and_then(Value::as_str)
        .filter(|r| !r.is_empty())
        .or_else(|| entry.role.as_str())?
        .to_string();

    let content = match &entry.content {
        Value::Object(fields) => fields.get("parts").and_then(coerce_text),
        other => coerce_text(other),
    }?;

    non_empty(role, content)
}

fn flat_message(raw: Value) -> Option<Message> {
    let entry: FlatEntry = match serde_json::from_value(raw) {
        Ok(entry) => entry,
        Err(e) => {
            tracing::debug!("Skipping malformed export entry: {e}");
            return None;
        }
    };
    let role = entry.role.as_str()?.to_string();
    if is_blank(&entry.content) {
        return None;
    }
    let content = coerce_text(&entry.content)?;
    non_empty(role, content)
}

/// `false`, zero and empty containers count as no content in a flat export.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn non_empty(role: String, content: String) -> Option<Message> {
    if role.is_empty() || content.is_empty() {
        return None;
    }
    Some(Message::new(role, content))
}

/// Render a JSON value as message text. `null` means no content.
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| coerce_text(item).unwrap_or_default())
                .collect();
            Some(parts.join("\n"))
        }
        other => Some(other.to_string()),
    }
}
