//! Error types for the codec, the rule configuration and the command-line tool.

use thiserror::Error;

/// Result type alias for seqsynth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A character of the input text does not fit in a single byte.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error(
    "cannot encode character {character:?} at position {position}: \
     only single-byte characters are supported"
)]
pub struct EncodingError {
    /// The offending character.
    pub character: char,
    /// Character index within the input text.
    pub position: usize,
}

/// A symbol of a nucleotide sequence is not one of A, C, G or T.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid nucleotide {symbol:?} at position {position}: expected one of A, C, G, T")]
pub struct DecodingError {
    /// The offending symbol.
    pub symbol: char,
    /// Character index within the input sequence.
    pub position: usize,
}

/// Error type for seqsynth operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Decoding(#[from] DecodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rule file is not valid TOML or has fields of the wrong type.
    #[error("failed to parse rules from '{path}': {message}")]
    ConfigParse { path: String, message: String },

    /// Rule value outside its permitted range.
    #[error("invalid rule '{field}': {message}")]
    InvalidRule { field: String, message: String },

    /// Malformed command-line argument.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },
}
