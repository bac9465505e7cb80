use std::io;

use thiserror::Error;

/// Every failure the client can report.
///
/// The variants are deliberately coarse: callers mostly need to tell a bad
/// input apart from a network problem, a rejected request, or a platform that
/// changed the shape of its responses.
#[derive(Error, Debug)]
pub enum VimeoError {
    /// Malformed or unrecognized video URL. Raised before any request is made.
    #[error("InvalidUrl: {0}")]
    InvalidUrl(String),
    #[error("TransportError: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
    /// An expected structure (embedded config URL, `files` block, base URL)
    /// was not found in an otherwise well-formed response.
    #[error("ParseError: {0}")]
    Parsing(String),
    /// The body is not valid JSON or base64 for the expected schema.
    #[error("DecodeError: {0}")]
    Decoding(String),
    #[error("ConfigError: {0}")]
    Config(String),
}

impl VimeoError {
    pub fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing(message.into())
    }

    /// Status code carried by [`VimeoError::UnexpectedStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// Recovers the client error behind an I/O error surfaced by a stream reader.
    pub fn from_io(err: &io::Error) -> Option<&VimeoError> {
        err.get_ref()?.downcast_ref::<VimeoError>()
    }
}

impl From<serde_json::Error> for VimeoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decoding(err.to_string())
    }
}

impl From<base64::DecodeError> for VimeoError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Decoding(format!("invalid init segment: {}", err))
    }
}

impl From<VimeoError> for io::Error {
    fn from(err: VimeoError) -> Self {
        io::Error::other(err)
    }
}

pub type Result<T> = std::result::Result<T, VimeoError>;
