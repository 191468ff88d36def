use serde::Serialize;

/// One turn of a conversation.
///
/// Messages are produced by the export parser and are read-only afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message {
    role: String,
    content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
