use std::collections::BTreeMap;

use taveren_core::lexicon::TagLexicon;
use taveren_core::model::Message;

/// Tag name to relevance score (occurrences per thousand words).
pub type TagScores = BTreeMap<String, f64>;

/// Tags whose keywords appear anywhere in `text`, as plain substrings.
///
/// Unlike [`compute_tag_scores`] this does not respect word boundaries, so
/// "saddle" counts for `grief` via "sad".
pub fn tag_text(lexicon: &TagLexicon, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lexicon
        .tags()
        .filter(|tag| {
            tag.keywords
                .iter()
                .any(|kw| lowered.contains(&kw.to_lowercase()))
        })
        .map(|tag| tag.name.clone())
        .collect()
}

/// Score each tag by whole-word keyword hits per thousand words.
///
/// Tags with no hits are left out. With no words at all the result is empty.
/// Scores are left unrounded.
pub fn compute_tag_scores<'a, I>(lexicon: &TagLexicon, messages: I) -> TagScores
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut total_words = 0usize;
    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();

    for message in messages {
        let content = message.content();
        total_words += lexicon.word_pattern().find_iter(content).count();
        for (tag, matchers) in lexicon.keyword_matchers() {
            let hits: usize = matchers.iter().map(|m| m.find_iter(content).count()).sum();
            *occurrences.entry(tag).or_default() += hits;
        }
    }

    if total_words == 0 {
        return TagScores::new();
    }

    occurrences
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(tag, count)| {
            let score = count as f64 / total_words as f64 * 1000.0;
            (tag.to_string(), score)
        })
        .collect()
}
