pub mod settings;

pub use settings::LexiconConfig;
