use serde::Serialize;

/// A symbolic rule definition loaded from a rule file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Rule {
    /// Unique, non-empty identifier.
    pub name: String,
    pub description: String,
    pub conditions: Vec<String>,
    pub actions: Vec<String>,
}
