use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use taveren_core::lexicon::TagLexicon;
use taveren_core::model::Message;

use crate::error::VaultError;
use crate::links::wikilink;
use crate::scoring::{compute_tag_scores, TagScores};

/// Tag every note carries regardless of content.
const SOURCE_TAG: &str = "chatgpt";

/// Render messages and write them to `<output_dir>/<thread_id>.md`.
///
/// The directory is created if missing and an existing note is overwritten.
/// Returns the path written.
pub fn to_markdown(
    lexicon: &TagLexicon,
    messages: &[Message],
    output_dir: &Path,
    thread_id: &str,
) -> Result<PathBuf, VaultError> {
    validate_thread_id(thread_id)?;
    fs::create_dir_all(output_dir)?;

    let document = render_document(lexicon, messages, thread_id, Utc::now());
    let output_path = output_dir.join(format!("{thread_id}.md"));
    fs::write(&output_path, document)?;

    tracing::info!(
        path = %output_path.display(),
        messages = messages.len(),
        "Wrote note"
    );
    Ok(output_path)
}

/// Build the full note text: frontmatter, a blank line, then one
/// `**Role:** content` paragraph per message.
pub fn render_document(
    lexicon: &TagLexicon,
    messages: &[Message],
    thread_id: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let scores = compute_tag_scores(lexicon, messages);

    let mut tags: BTreeSet<&str> = scores.keys().map(String::as_str).collect();
    tags.insert(SOURCE_TAG);
    let tags: Vec<&str> = tags.into_iter().collect();

    let turns: Vec<String> = messages
        .iter()
        .map(|m| format!("**{}:** {}", title_case(m.role()), wikilink(lexicon, m.content())))
        .collect();

    let mut doc = String::new();
    doc.push_str("---\n");
    doc.push_str(&format!("title: ChatGPT Thread {thread_id}\n"));
    doc.push_str(&format!("tags: [{}]\n", tags.join(", ")));
    doc.push_str(&format!(
        "timestamp: {}\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    doc.push_str(&format!("thread_id: {thread_id}\n"));
    doc.push_str(&format!("symbolic_weight: {:.2}\n", symbolic_weight(&scores)));
    doc.push_str("---\n");
    doc.push('\n');
    doc.push_str(&turns.join("\n\n"));
    doc.push('\n');
    doc
}

/// Sum of all tag scores, rounded to two decimals with ties going to the
/// even neighbour (0.125 becomes 0.12).
pub fn symbolic_weight(scores: &TagScores) -> f64 {
    let total: f64 = scores.values().sum();
    (total * 100.0).round_ties_even() / 100.0
}

fn validate_thread_id(thread_id: &str) -> Result<(), VaultError> {
    let bad = thread_id.is_empty()
        || thread_id == "."
        || thread_id == ".."
        || thread_id.contains(['/', '\\']);
    if bad {
        return Err(VaultError::InvalidThreadId(thread_id.to_string()));
    }
    Ok(())
}

/// Upper-case the first cased letter of each word, lower-case the rest.
/// Anything without case (digits, `_`, CJK) starts a new word:
/// `tool_call` becomes `Tool_Call`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
