//! Media source contract: resolving and browsing host-managed media

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{BrowseMedia, ContentFilter, Result};

/// URI scheme prefix of media source identifiers
pub const MEDIA_SOURCE_URI_SCHEME: &str = "media-source://";

/// Check whether an identifier addresses host-managed media
///
/// Accepted forms are `media-source://`, `media-source://<domain>` and
/// `media-source://<domain>/<identifier>`, where the domain is lowercase
/// alphanumeric plus underscores and neither starts nor ends with `_`.
pub fn is_media_source_id(media_content_id: &str) -> bool {
    let Some(rest) = media_content_id.strip_prefix(MEDIA_SOURCE_URI_SCHEME) else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }

    let (domain, identifier) = match rest.split_once('/') {
        Some((domain, identifier)) => (domain, Some(identifier)),
        None => (rest, None),
    };

    let valid_domain = !domain.is_empty()
        && !domain.starts_with('_')
        && !domain.ends_with('_')
        && domain
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase() || c == '_');

    let valid_identifier = match identifier {
        None => true,
        Some(id) => !id.is_empty() && !id.starts_with('/'),
    };

    valid_domain && valid_identifier
}

/// Playable media produced by resolving a media source identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayMedia {
    pub url: String,
    pub mime_type: String,
}

/// Host subsystem that owns media libraries
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Resolve a `media-source://` identifier into a playable URL
    ///
    /// `target_entity_id` is the entity that will play the media, when known.
    async fn resolve_media(
        &self,
        media_content_id: &str,
        target_entity_id: Option<&str>,
    ) -> Result<PlayMedia>;

    /// Browse the media tree at `media_content_id` (the root when `None`)
    ///
    /// Implementations apply `filter` to the returned tree.
    async fn browse_media(
        &self,
        media_content_id: Option<&str>,
        filter: &ContentFilter,
    ) -> Result<BrowseMedia>;
}

#[async_trait]
impl<T: MediaSource + ?Sized> MediaSource for Arc<T> {
    async fn resolve_media(
        &self,
        media_content_id: &str,
        target_entity_id: Option<&str>,
    ) -> Result<PlayMedia> {
        (**self).resolve_media(media_content_id, target_entity_id).await
    }

    async fn browse_media(
        &self,
        media_content_id: Option<&str>,
        filter: &ContentFilter,
    ) -> Result<BrowseMedia> {
        (**self).browse_media(media_content_id, filter).await
    }
}
