//! Host-side model for media player entities
//!
//! Everything here is the host's vocabulary: the states and repeat modes it
//! displays, the feature bitmask its frontend understands, the media browser
//! tree, and the contracts of the host subsystems an entity relies on
//! (`MediaSource` for media libraries, `PlayMediaUrlProcessor` for URLs).
//!
//! Device integrations implement [`MediaPlayerEntity`] on top of this model.

pub mod browse;
pub mod entity;
pub mod error;
pub mod features;
pub mod media_player;
pub mod media_source;
pub mod play_url;

pub use browse::{BrowseMedia, ContentFilter, MediaClass};
pub use entity::MediaPlayerEntity;
pub use error::{MediaSourceError, Result};
pub use features::MediaPlayerEntityFeature;
pub use media_player::{MediaPlayerDeviceClass, MediaPlayerState, MediaType, RepeatMode};
pub use media_source::{is_media_source_id, MediaSource, PlayMedia, MEDIA_SOURCE_URI_SCHEME};
pub use play_url::PlayMediaUrlProcessor;

/// Component key under which media player entities are registered
pub const PLATFORM_COMPONENT_KEY: &str = "media_player";
