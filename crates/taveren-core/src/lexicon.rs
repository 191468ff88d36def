//! Tag keywords and wikilink targets.
//!
//! A [`TagLexicon`] is built once (from the built-in tables or a config file)
//! and handed to the scorer and the link annotator. All patterns are compiled
//! at construction, so matching against a lexicon cannot fail.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const BUILTIN_TAGS: &[(&str, &[&str])] = &[
    ("pressure", &["pressure"]),
    ("grief", &["grief", "sad", "loss"]),
    ("recursion", &["recursion", "recursive"]),
    ("product-dev", &["product", "dev", "development"]),
    ("godform", &["godform", "deity", "god"]),
];

const BUILTIN_LINKS: &[(&str, &str)] = &[
    ("EEV", "EEV"),
    ("pressure", "Pressure"),
    ("grief", "Grief"),
    ("recursion", "Recursion"),
    ("product", "Product-Development"),
    ("godform", "Godform"),
];

/// A tag and the words that trigger it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

/// A trigger word and the note it links to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkEntry {
    pub trigger: String,
    pub name: String,
}

#[derive(Debug, Clone)]
struct CompiledTag {
    entry: TagEntry,
    matchers: Vec<Regex>,
}

#[derive(Debug, Clone)]
pub struct TagLexicon {
    tags: Vec<CompiledTag>,
    links: Vec<LinkEntry>,
    link_pattern: Option<Regex>,
    link_names: HashMap<String, String>,
    word_pattern: Regex,
}

impl TagLexicon {
    /// Build a lexicon, validating entries and compiling every pattern.
    ///
    /// Declaration order is kept: tags are reported in this order, and when
    /// two triggers could match at the same position the earlier one wins.
    pub fn new(tags: Vec<TagEntry>, links: Vec<LinkEntry>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(tags.len());
        for entry in tags {
            if entry.name.trim().is_empty() {
                return Err(CoreError::Config("tag name must not be empty".into()));
            }
            if !seen.insert(entry.name.clone()) {
                return Err(CoreError::Config(format!("duplicate tag: {}", entry.name)));
            }
            let mut matchers = Vec::with_capacity(entry.keywords.len());
            for keyword in &entry.keywords {
                if keyword.is_empty() {
                    return Err(CoreError::Config(format!(
                        "tag {} has an empty keyword",
                        entry.name
                    )));
                }
                matchers.push(Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))?);
            }
            compiled.push(CompiledTag { entry, matchers });
        }

        let mut link_names = HashMap::new();
        for link in &links {
            if link.trigger.is_empty() {
                return Err(CoreError::Config("link trigger must not be empty".into()));
            }
            // First declaration wins, same as the alternation below.
            link_names
                .entry(link.trigger.to_lowercase())
                .or_insert_with(|| link.name.clone());
        }

        let link_pattern = if links.is_empty() {
            None
        } else {
            let alternation: Vec<String> =
                links.iter().map(|l| regex::escape(&l.trigger)).collect();
            Some(Regex::new(&format!(r"(?i)\b(?:{})\b", alternation.join("|")))?)
        };

        Ok(Self {
            tags: compiled,
            links,
            link_pattern,
            link_names,
            word_pattern: Regex::new(r"\w+")?,
        })
    }

    /// The tables shipped with taveren.
    pub fn builtin() -> Result<Self, CoreError> {
        let tags = BUILTIN_TAGS
            .iter()
            .map(|(name, keywords)| TagEntry {
                name: (*name).to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();
        let links = BUILTIN_LINKS
            .iter()
            .map(|(trigger, name)| LinkEntry {
                trigger: (*trigger).to_string(),
                name: (*name).to_string(),
            })
            .collect();
        Self::new(tags, links)
    }

    pub fn tags(&self) -> impl Iterator<Item = &TagEntry> {
        self.tags.iter().map(|t| &t.entry)
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    /// Whole-word, case-insensitive matchers for each tag's keywords.
    pub fn keyword_matchers(&self) -> impl Iterator<Item = (&str, &[Regex])> {
        self.tags
            .iter()
            .map(|t| (t.entry.name.as_str(), t.matchers.as_slice()))
    }

    /// Single alternation over every link trigger; `None` when there are no links.
    pub fn link_pattern(&self) -> Option<&Regex> {
        self.link_pattern.as_ref()
    }

    /// Canonical link name for a matched trigger, looked up case-insensitively.
    pub fn link_name(&self, word: &str) -> Option<&str> {
        self.link_names.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Word tokenizer: maximal runs of alphanumeric or underscore characters.
    pub fn word_pattern(&self) -> &Regex {
        &self.word_pattern
    }
}
