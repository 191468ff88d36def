use std::path::Path;

use taveren_core::Rule;
use taveren_vault::{symbolic_weight, TagScores};

use super::OutputFormat;

pub fn format_conversion(
    path: &Path,
    message_count: usize,
    scores: &TagScores,
    fmt: OutputFormat,
) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "path": path.display().to_string(),
            "messages": message_count,
            "tags": scores,
            "symbolic_weight": symbolic_weight(scores),
        }))
        .unwrap_or_default(),
        OutputFormat::Text => format!("Wrote {}", path.display()),
    }
}

pub fn format_scores(scores: &TagScores, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(scores).unwrap_or_default(),
        OutputFormat::Text => format_scores_text(scores),
    }
}

fn format_scores_text(scores: &TagScores) -> String {
    if scores.is_empty() {
        return "No tags found.".to_string();
    }
    let mut out = String::new();
    for (tag, score) in scores {
        out.push_str(&format!("{tag}\t{score:.2}\n"));
    }
    out.push_str(&format!("symbolic_weight\t{:.2}", symbolic_weight(scores)));
    out
}

pub fn format_rules(rules: &[Rule], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(rules).unwrap_or_default(),
        OutputFormat::Text => format_rules_text(rules),
    }
}

fn format_rules_text(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "No rules found.".to_string();
    }

    let mut out = String::new();
    for rule in rules {
        if rule.description.is_empty() {
            out.push_str(&format!("{}\n", rule.name));
        } else {
            out.push_str(&format!("{}: {}\n", rule.name, rule.description));
        }
        if !rule.conditions.is_empty() {
            out.push_str(&format!("  when: {}\n", rule.conditions.join(", ")));
        }
        if !rule.actions.is_empty() {
            out.push_str(&format!("  then: {}\n", rule.actions.join(", ")));
        }
    }
    out.push_str(&format!("{} rule(s)", rules.len()));
    out
}
