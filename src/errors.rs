//! Error types for gateway request building and response parsing.

/// Error types for gateway client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL used to derive a browser-payment return URL could not be parsed.
    #[error("Malformed return URL '{url}': {source}")]
    MalformedReturnUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A gateway response did not have the expected shape.
    #[error("Response parse error: {0}")]
    Parse(#[from] ParseError),

    /// JSON serialization errors.
    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Failures while extracting a typed result from a gateway response body.
///
/// Every variant is fatal to the parse call; no partial result is produced.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The body is not a JSON document.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A required JSON path is absent.
    #[error("Missing field '{path}'")]
    MissingField { path: String },

    /// A JSON path is present but holds the wrong kind of value.
    #[error("Field '{path}' has unexpected type; expected {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
    },

    /// An array did not contain the element being read.
    #[error("Index {index} out of range for '{path}' (length {len})")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
}

impl ParseError {
    /// The JSON path the failure refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            ParseError::InvalidJson(_) => None,
            ParseError::MissingField { path }
            | ParseError::TypeMismatch { path, .. }
            | ParseError::IndexOutOfRange { path, .. } => Some(path),
        }
    }
}

/// A specialized `Result` type for gateway client operations.
pub type Result<T> = std::result::Result<T, Error>;
