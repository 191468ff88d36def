use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use taveren_vault::compute_tag_scores;

use crate::output::{format, OutputFormat};

#[derive(Args)]
pub struct TagsArgs {
    /// Path to a text or JSON export. Use '-' for stdin
    pub input: PathBuf,

    /// JSON lexicon file replacing the built-in tags and links
    #[arg(long, env = "TAVEREN_LEXICON")]
    pub lexicon: Option<PathBuf>,
}

pub fn run(args: &TagsArgs, fmt: OutputFormat) -> Result<()> {
    let lexicon = super::load_lexicon(args.lexicon.as_deref())?;
    let messages = super::read_messages(&args.input)?;
    let scores = compute_tag_scores(&lexicon, &messages);
    println!("{}", format::format_scores(&scores, fmt));
    Ok(())
}
