use serde::Serialize;

use super::rule::Rule;

/// Rules that fired during an evaluation, with free-form notes.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DiagnosticResult {
    pub triggered_rules: Vec<Rule>,
    pub notes: Vec<String>,
}

/// Render one summary line per result.
pub fn summarise<'a, I>(results: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a DiagnosticResult>,
{
    results
        .into_iter()
        .map(|result| {
            let names: Vec<&str> = result
                .triggered_rules
                .iter()
                .map(|r| r.name.as_str())
                .collect();
            format!(
                "Rules: {} | Notes: {}",
                names.join(", "),
                result.notes.join("; ")
            )
        })
        .collect()
}
