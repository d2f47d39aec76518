//! Play-media URL processing

use url::Url;

use crate::{MediaSourceError, Result};

/// Turns media URLs into something a device on the network can fetch
///
/// Absolute URLs pass through unchanged. Root-relative paths (as produced by
/// host-served media) are joined onto the host base URL when one is known.
/// Anything else, including bare relative ids and protocol-relative
/// `//host/path` URLs, is returned as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayMediaUrlProcessor {
    base_url: Option<Url>,
}

impl PlayMediaUrlProcessor {
    pub fn new(base_url: Option<Url>) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn process(&self, media_url: &str) -> Result<String> {
        match Url::parse(media_url) {
            Ok(_) => Ok(media_url.to_string()),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) if is_root_relative(media_url) => Ok(base.join(media_url)?.to_string()),
                _ => Ok(media_url.to_string()),
            },
            Err(err) => Err(MediaSourceError::from(err)),
        }
    }
}

fn is_root_relative(media_url: &str) -> bool {
    media_url.starts_with('/') && !media_url.starts_with("//")
}
