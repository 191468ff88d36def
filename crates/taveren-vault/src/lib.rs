//! Turns parsed conversations into Obsidian-style markdown notes.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//! use taveren_core::{Message, TagLexicon};
//!
//! let lexicon = TagLexicon::builtin().unwrap();
//! let messages = vec![
//!     Message::new("user", "The pressure is building"),
//!     Message::new("assistant", "Grief often looks like that."),
//! ];
//! let path = taveren_vault::to_markdown(&lexicon, &messages, Path::new("vault"), "t1").unwrap();
//! println!("Wrote {}", path.display());
//! ```

pub mod error;
pub mod links;
pub mod render;
pub mod scoring;

pub use error::VaultError;
pub use links::wikilink;
pub use render::{render_document, symbolic_weight, to_markdown};
pub use scoring::{compute_tag_scores, tag_text, TagScores};
