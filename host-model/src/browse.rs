//! Media browsing tree and content filtering

use serde::{Deserialize, Serialize};

/// Class of an item in the media browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaClass {
    Directory,
    Music,
    Track,
    Playlist,
    Podcast,
    Url,
    App,
}

/// A node in the media browser tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseMedia {
    pub title: String,
    pub media_class: MediaClass,
    pub media_content_id: String,
    /// MIME type for playable items, a host content type for directories
    pub media_content_type: String,
    pub can_play: bool,
    pub can_expand: bool,
    pub thumbnail: Option<String>,
    pub children: Vec<BrowseMedia>,
}

impl BrowseMedia {
    /// Create a directory node with no children
    pub fn directory(
        title: impl Into<String>,
        media_content_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            media_class: MediaClass::Directory,
            media_content_id: media_content_id.into(),
            media_content_type: "directory".to_string(),
            can_play: false,
            can_expand: true,
            thumbnail: None,
            children: Vec::new(),
        }
    }

    /// Create a playable leaf item
    pub fn item(
        title: impl Into<String>,
        media_class: MediaClass,
        media_content_id: impl Into<String>,
        media_content_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            media_class,
            media_content_id: media_content_id.into(),
            media_content_type: media_content_type.into(),
            can_play: true,
            can_expand: false,
            thumbnail: None,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: BrowseMedia) -> Self {
        self.children.push(child);
        self
    }

    /// Drop leaf children the filter rejects, at every depth
    ///
    /// Expandable nodes are always kept so the user can still navigate into
    /// them.
    pub fn apply_filter(&mut self, filter: &ContentFilter) {
        self.children
            .retain(|child| child.can_expand || filter.matches(child));
        for child in &mut self.children {
            child.apply_filter(filter);
        }
    }
}

/// Predicate over browse items, applied by a media source while browsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentFilter {
    /// Keep everything
    All,
    /// Keep items whose content type starts with the prefix, e.g. `audio/`
    ContentTypePrefix(String),
}

impl ContentFilter {
    pub fn content_type_prefix(prefix: impl Into<String>) -> Self {
        Self::ContentTypePrefix(prefix.into())
    }

    pub fn matches(&self, item: &BrowseMedia) -> bool {
        match self {
            ContentFilter::All => true,
            ContentFilter::ContentTypePrefix(prefix) => {
                item.media_content_type.starts_with(prefix.as_str())
            }
        }
    }
}
