use thiserror::Error;

/// Failures of a single word lookup.
///
/// The `Display` text of each variant is the message shown to the user, so
/// transport details live in fields and are only logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Please enter a word to search")]
    EmptyWord,

    #[error("No definitions found for \"{0}\"")]
    NotFound(String),

    #[error("Failed to fetch definition")]
    Transport { reason: String },
}

impl LookupError {
    pub fn transport(reason: impl Into<String>) -> Self {
        LookupError::Transport {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum WordifyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Lookup(#[from] LookupError),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, WordifyError>;
