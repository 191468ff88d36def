pub mod config;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod recursion;
pub mod rules;

pub use error::CoreError;
pub use lexicon::TagLexicon;
pub use model::{DiagnosticResult, Message, Rule};
