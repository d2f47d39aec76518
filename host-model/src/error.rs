use thiserror::Error;

/// Errors raised by the host's media source subsystem
#[derive(Debug, Error)]
pub enum MediaSourceError {
    /// No media source is registered for the identifier's domain
    #[error("Unknown media source: {0}")]
    UnknownSource(String),

    /// The identifier is well formed but does not resolve to playable media
    #[error("Unable to resolve media: {0}")]
    Unresolvable(String),

    /// A media URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Browsing the media tree failed
    #[error("Browse failed: {0}")]
    BrowseFailed(String),
}

impl From<url::ParseError> for MediaSourceError {
    fn from(err: url::ParseError) -> Self {
        MediaSourceError::InvalidUrl(err.to_string())
    }
}

/// Type alias for results that can return a MediaSourceError
pub type Result<T> = std::result::Result<T, MediaSourceError>;
