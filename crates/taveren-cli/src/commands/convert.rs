use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use taveren_vault::{compute_tag_scores, to_markdown};

use crate::output::{format, OutputFormat};

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to a text or JSON export. Use '-' for stdin
    pub input: PathBuf,

    /// Obsidian vault directory
    #[arg(short, long, env = "TAVEREN_VAULT", default_value = "vault")]
    pub output: PathBuf,

    /// Thread identifier, used for the note title and file name
    #[arg(long, default_value = "default")]
    pub thread: String,

    /// JSON lexicon file replacing the built-in tags and links
    #[arg(long, env = "TAVEREN_LEXICON")]
    pub lexicon: Option<PathBuf>,
}

pub fn run(args: &ConvertArgs, fmt: OutputFormat) -> Result<()> {
    let lexicon = super::load_lexicon(args.lexicon.as_deref())?;
    let messages = super::read_messages(&args.input)?;
    if messages.is_empty() {
        tracing::warn!("No messages found in {}", args.input.display());
    }

    let path = to_markdown(&lexicon, &messages, &args.output, &args.thread)
        .context("Failed to write note")?;
    let scores = compute_tag_scores(&lexicon, &messages);

    println!(
        "{}",
        format::format_conversion(&path, messages.len(), &scores, fmt)
    );
    Ok(())
}
