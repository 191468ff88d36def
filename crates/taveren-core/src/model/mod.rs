pub mod diagnostics;
pub mod message;
pub mod rule;

pub use diagnostics::{summarise, DiagnosticResult};
pub use message::Message;
pub use rule::Rule;
