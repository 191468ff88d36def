//! Loading symbolic rule definitions from JSON.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::Rule;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Rule file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid rule: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and validate rules from a JSON file.
///
/// The file must hold an array of objects. `name` is required; `description`,
/// `conditions` and `actions` default to empty.
pub fn load_rules(path: &Path) -> Result<Vec<Rule>, RuleError> {
    if !path.exists() {
        return Err(RuleError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    let rules = parse_rules(&text)?;
    tracing::debug!(path = %path.display(), count = rules.len(), "Loaded rules");
    Ok(rules)
}

/// Validate rules from an in-memory JSON document.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>, RuleError> {
    let data: Value = serde_json::from_str(text)?;
    let Value::Array(entries) = data else {
        return Err(RuleError::Validation(
            "Rule file must contain a list of rules".into(),
        ));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, raw)| match raw {
            Value::Object(fields) => normalise_rule(fields),
            _ => Err(RuleError::Validation(format!(
                "Rule at index {index} is not an object"
            ))),
        })
        .collect()
}

fn normalise_rule(fields: &Map<String, Value>) -> Result<Rule, RuleError> {
    let name = match fields.get("name") {
        None => return Err(RuleError::Validation("Missing required key: name".into())),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(_) => {
            return Err(RuleError::Validation(
                "Rule name must be a non-empty string".into(),
            ))
        }
    };

    let description = match fields.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    Ok(Rule {
        name,
        description,
        conditions: string_list(fields, "conditions")?,
        actions: string_list(fields, "actions")?,
    })
}

fn string_list(fields: &Map<String, Value>, key: &str) -> Result<Vec<String>, RuleError> {
    let items = match fields.get(key) {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(RuleError::Validation(format!(
                "{key} must be a sequence of strings"
            )))
        }
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(RuleError::Validation(format!(
                "{key} must contain only strings"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_rules_from_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rules.json");
        std::fs::write(
            &path,
            r#"
            [
                {
                    "name": "diagnostic_rule",
                    "description": "Detects anomalies",
                    "conditions": ["signal > threshold"],
                    "actions": ["raise_alert"]
                }
            ]
            "#,
        )
        .unwrap();

        let rules = load_rules(&path).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name, "diagnostic_rule");
        assert_eq!(rules[0].description, "Detects anomalies");
        assert_eq!(rules[0].conditions, vec!["signal > threshold"]);
        assert_eq!(rules[0].actions, vec!["raise_alert"]);
    }

    #[test]
    fn test_load_rules_requires_sequence() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("invalid_rules.json");
        std::fs::write(&path, "{}").unwrap();

        let err = load_rules(&path).unwrap_err();
        assert!(matches!(err, RuleError::Validation(_)));
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_rules(&tmp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, RuleError::NotFound(_)));
    }

    #[test]
    fn test_optional_fields_default() {
        let rules = parse_rules(r#"[{"name": "bare"}, {"name": "second", "description": 3}]"#)
            .unwrap();
        assert_eq!(rules[0].description, "");
        assert!(rules[0].conditions.is_empty());
        assert!(rules[0].actions.is_empty());
        assert_eq!(rules[1].description, "3");
    }

    #[test]
    fn test_validation_messages() {
        let cases = [
            (r#"[1]"#, "Rule at index 0 is not an object"),
            (r#"[{"description": "x"}]"#, "Missing required key: name"),
            (r#"[{"name": ""}]"#, "Rule name must be a non-empty string"),
            (r#"[{"name": 7}]"#, "Rule name must be a non-empty string"),
            (
                r#"[{"name": "a", "conditions": "x > 1"}]"#,
                "conditions must be a sequence of strings",
            ),
            (
                r#"[{"name": "a", "actions": ["ok", 2]}]"#,
                "actions must contain only strings",
            ),
        ];
        for (input, expected) in cases {
            match parse_rules(input) {
                Err(RuleError::Validation(msg)) => assert_eq!(msg, expected, "input: {input}"),
                other => panic!("expected validation error for {input}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_json_is_not_validation_error() {
        let err = parse_rules("[{").unwrap_err();
        assert!(matches!(err, RuleError::Json(_)));
    }
}
