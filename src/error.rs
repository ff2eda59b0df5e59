/// Error type for marketplace feed parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Malformed XML reported by the underlying reader.
    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document ended before the element being read was closed.
    #[error("unexpected end of document")]
    UnexpectedEof,

    /// Something other than the expected node kind was found.
    #[error("expected element start tag, found {0}")]
    UnexpectedNode(&'static str),

    /// A child element appeared where pure text content was required.
    #[error("unexpected child element in text content of `{0}`")]
    MixedContent(String),

    /// Element content failed to parse as an RFC 3339 timestamp.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Element content failed to parse as a boolean.
    #[error("invalid boolean: {0}")]
    InvalidBoolean(String),

    /// Element content failed to parse as an integer.
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// The embedded device-capabilities payload could not be decoded.
    #[error("invalid capabilities payload: {0}")]
    InvalidCapabilities(String),
}

/// Result type for marketplace feed operations.
pub type Result<T> = std::result::Result<T, Error>;
