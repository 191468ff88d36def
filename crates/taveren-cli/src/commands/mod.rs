pub mod convert;
pub mod rules;
pub mod tags;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use taveren_capture::ExportImporter;
use taveren_core::config::LexiconConfig;
use taveren_core::{Message, TagLexicon};

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a text or JSON export into a markdown note
    Convert(convert::ConvertArgs),
    /// Show tag scores for an export without writing anything
    Tags(tags::TagsArgs),
    /// Validate a rule file and list its rules
    Rules(rules::RulesArgs),
}

/// Read an export from a file, or from stdin when `input` is `-`.
fn read_messages(input: &Path) -> Result<Vec<Message>> {
    if input == Path::new("-") {
        ExportImporter::import_reader(std::io::stdin().lock()).context("Failed to read stdin")
    } else {
        ExportImporter::import_file(input)
            .with_context(|| format!("Failed to read {}", input.display()))
    }
}

/// The built-in lexicon, or the one defined in `path`.
fn load_lexicon(path: Option<&Path>) -> Result<TagLexicon> {
    match path {
        Some(path) => LexiconConfig::load(path)
            .and_then(LexiconConfig::into_lexicon)
            .with_context(|| format!("Failed to load lexicon {}", path.display())),
        None => TagLexicon::builtin().context("Failed to build built-in lexicon"),
    }
}
