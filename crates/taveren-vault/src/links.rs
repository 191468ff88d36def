use regex::Captures;

use taveren_core::lexicon::TagLexicon;

/// Wrap every known trigger word in `text` as an Obsidian `[[wikilink]]`.
///
/// Matching is case-insensitive and whole-word; the link uses the canonical
/// name from the lexicon. Everything else is left as is.
pub fn wikilink(lexicon: &TagLexicon, text: &str) -> String {
    let Some(pattern) = lexicon.link_pattern() else {
        return text.to_string();
    };
    pattern
        .replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            match lexicon.link_name(word) {
                Some(name) => format!("[[{name}]]"),
                None => word.to_string(),
            }
        })
        .into_owned()
}
