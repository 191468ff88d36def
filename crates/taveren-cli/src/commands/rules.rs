use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use taveren_core::rules::load_rules;

use crate::output::{format, OutputFormat};

#[derive(Args)]
pub struct RulesArgs {
    /// Path to a JSON rule file
    pub path: PathBuf,
}

pub fn run(args: &RulesArgs, fmt: OutputFormat) -> Result<()> {
    let rules = load_rules(&args.path)
        .with_context(|| format!("Failed to load rules from {}", args.path.display()))?;
    println!("{}", format::format_rules(&rules, fmt));
    Ok(())
}
