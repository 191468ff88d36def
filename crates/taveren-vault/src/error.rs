use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid thread id {0:?}: must be non-empty and contain no path separators")]
    InvalidThreadId(String),
}
