use thiserror::Error;

/// Shown when a transport failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong.";

/// Everything that can end a lookup attempt without a record.
///
/// The `Display` output is exactly what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The identifier was empty or whitespace; no request was made.
    #[error("Please enter a weather ID.")]
    MissingIdentifier,

    /// The server answered with a non-success status. The status is kept
    /// for logs only.
    #[error("Weather data not found.")]
    NotFound { status: u16 },

    /// The request could not be sent or the body could not be read/parsed.
    #[error("{0}")]
    Transport(String),
}

impl LookupError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            LookupError::Transport(FALLBACK_MESSAGE.to_string())
        } else {
            LookupError::Transport(message)
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::transport(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::transport(err.to_string())
    }
}
