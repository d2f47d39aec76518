//! Configuration types for the media player adapter

use host_model::{ContentFilter, MediaPlayerDeviceClass, PlayMediaUrlProcessor};
use url::Url;

/// Default content type prefix applied when browsing media
pub const DEFAULT_BROWSE_CONTENT_PREFIX: &str = "audio/";

/// Configuration for a `MediaPlayerAdapter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Device class reported to the host
    /// Default: Speaker
    pub device_class: MediaPlayerDeviceClass,

    /// Only items whose content type starts with this prefix are offered when
    /// browsing. `None` disables filtering.
    /// Default: "audio/"
    pub browse_content_prefix: Option<String>,

    /// Base URL of the host, used to make relative media URLs fetchable by
    /// the device
    /// Default: None
    pub base_url: Option<Url>,

    /// Entity id the host assigned to this media player
    /// Default: None
    pub entity_id: Option<String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            device_class: MediaPlayerDeviceClass::Speaker,
            browse_content_prefix: Some(DEFAULT_BROWSE_CONTENT_PREFIX.to_string()),
            base_url: None,
            entity_id: None,
        }
    }
}

impl AdapterConfig {
    /// Create a new AdapterConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an AdapterConfig that offers every media type when browsing
    pub fn unfiltered() -> Self {
        Self {
            browse_content_prefix: None,
            ..Default::default()
        }
    }

    pub fn with_device_class(mut self, device_class: MediaPlayerDeviceClass) -> Self {
        self.device_class = device_class;
        self
    }

    pub fn with_browse_content_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.browse_content_prefix = Some(prefix.into());
        self
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Filter handed to the media source when browsing
    pub fn content_filter(&self) -> ContentFilter {
        match &self.browse_content_prefix {
            Some(prefix) => ContentFilter::content_type_prefix(prefix.clone()),
            None => ContentFilter::All,
        }
    }

    /// URL processor for play-media requests
    pub fn url_processor(&self) -> PlayMediaUrlProcessor {
        PlayMediaUrlProcessor::new(self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdapterConfig::default();
        assert_eq!(config.device_class, MediaPlayerDeviceClass::Speaker);
        assert_eq!(
            config.content_filter(),
            ContentFilter::ContentTypePrefix("audio/".to_string())
        );
        assert!(config.base_url.is_none());
        assert_eq!(config, AdapterConfig::new());
    }

    #[test]
    fn test_unfiltered_config() {
        assert_eq!(AdapterConfig::unfiltered().content_filter(), ContentFilter::All);
    }

    #[test]
    fn test_builder_methods() {
        let base = Url::parse("http://host.local:8123").unwrap();
        let config = AdapterConfig::new()
            .with_device_class(MediaPlayerDeviceClass::Receiver)
            .with_browse_content_prefix("video/")
            .with_base_url(base.clone())
            .with_entity_id("media_player.kitchen");

        assert_eq!(config.device_class, MediaPlayerDeviceClass::Receiver);
        assert_eq!(config.entity_id.as_deref(), Some("media_player.kitchen"));
        assert_eq!(config.url_processor().base_url(), Some(&base));
        assert_eq!(
            config.content_filter(),
            ContentFilter::ContentTypePrefix("video/".to_string())
        );
    }
}
