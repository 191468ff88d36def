use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::lexicon::{LinkEntry, TagEntry, TagLexicon};

/// On-disk lexicon definition (JSON).
///
/// Both tables are arrays so that declaration order survives parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    #[serde(default)]
    pub tags: Vec<TagEntry>,
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

impl LexiconConfig {
    /// Read a lexicon config file from disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Err(CoreError::Config(format!(
                "Lexicon file not found: {}",
                path.display()
            )));
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            tags = config.tags.len(),
            links = config.links.len(),
            "Loaded lexicon config"
        );
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate and compile into a [`TagLexicon`].
    pub fn into_lexicon(self) -> Result<TagLexicon, CoreError> {
        TagLexicon::new(self.tags, self.links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_lexicon_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.json");
        std::fs::write(
            &path,
            r#"{
                "tags": [{"name": "joy", "keywords": ["joy", "glad"]}],
                "links": [{"trigger": "joy", "name": "Joy"}]
            }"#,
        )
        .unwrap();

        let lexicon = LexiconConfig::load(&path).unwrap().into_lexicon().unwrap();
        let names: Vec<&str> = lexicon.tags().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["joy"]);
        assert_eq!(lexicon.link_name("Joy"), Some("Joy"));
    }

    #[test]
    fn test_missing_tables_default_to_empty() {
        let config = LexiconConfig::from_json("{}").unwrap();
        assert_eq!(config, LexiconConfig::default());
        let lexicon = config.into_lexicon().unwrap();
        assert_eq!(lexicon.tags().count(), 0);
        assert!(lexicon.link_pattern().is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LexiconConfig::from_json(r#"{"tagz": []}"#).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = LexiconConfig::load(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
