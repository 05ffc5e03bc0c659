// File: src/error.rs
use thiserror::Error;

/// Output written in place of a name when the input is not a digit string.
pub const INVALID_INPUT_SENTINEL: &str = "not a number";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// The input contained something other than ASCII decimal digits.
    #[error("not an integer: {input:?}")]
    InvalidInput { input: String },
}

pub type Result<T> = std::result::Result<T, NamingError>;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("cache snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("could not replace cache snapshot: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("cache snapshot format {found:?} does not match this build ({expected:?})")]
    FormatMismatch { found: String, expected: String },

    #[error("cache snapshot has wrong entries in its {table} table")]
    Inconsistent { table: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}
