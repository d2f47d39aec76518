//! The media player entity interface the host drives

use async_trait::async_trait;

use crate::{
    BrowseMedia, MediaPlayerDeviceClass, MediaPlayerEntityFeature, MediaPlayerState, MediaType,
    RepeatMode,
};

/// A media player as seen by the host
///
/// Properties are synchronous reads of the entity's latest known state and
/// return `None` while that state is unknown. Commands are suspension points:
/// each resolves once the underlying device has handled the request.
#[async_trait]
pub trait MediaPlayerEntity: Send + Sync {
    /// Error type for property reads and commands
    type Error: std::error::Error + Send + Sync + 'static;

    // ========================================================================
    // Properties
    // ========================================================================

    fn state(&self) -> Result<Option<MediaPlayerState>, Self::Error>;

    /// Volume level (0.0 - 1.0)
    fn volume_level(&self) -> Option<f32>;

    fn is_volume_muted(&self) -> Option<bool>;

    fn source(&self) -> Option<String>;

    fn source_list(&self) -> Option<Vec<String>>;

    fn sound_mode(&self) -> Option<String>;

    fn sound_mode_list(&self) -> Option<Vec<String>>;

    fn repeat(&self) -> Result<Option<RepeatMode>, Self::Error>;

    fn supported_features(&self) -> MediaPlayerEntityFeature;

    fn device_class(&self) -> Option<MediaPlayerDeviceClass> {
        None
    }

    // ========================================================================
    // Commands
    // ========================================================================

    async fn media_play(&self) -> Result<(), Self::Error>;

    async fn media_pause(&self) -> Result<(), Self::Error>;

    async fn media_stop(&self) -> Result<(), Self::Error>;

    /// Seek to `position` seconds
    async fn media_seek(&self, position: f32) -> Result<(), Self::Error>;

    async fn media_next_track(&self) -> Result<(), Self::Error>;

    async fn media_previous_track(&self) -> Result<(), Self::Error>;

    /// Set volume level, range 0..1
    async fn set_volume_level(&self, volume: f32) -> Result<(), Self::Error>;

    async fn mute_volume(&self, mute: bool) -> Result<(), Self::Error>;

    async fn volume_up(&self) -> Result<(), Self::Error>;

    async fn volume_down(&self) -> Result<(), Self::Error>;

    async fn turn_on(&self) -> Result<(), Self::Error>;

    async fn turn_off(&self) -> Result<(), Self::Error>;

    async fn select_source(&self, source: &str) -> Result<(), Self::Error>;

    async fn select_sound_mode(&self, sound_mode: &str) -> Result<(), Self::Error>;

    async fn set_shuffle(&self, shuffle: bool) -> Result<(), Self::Error>;

    async fn set_repeat(&self, repeat: RepeatMode) -> Result<(), Self::Error>;

    async fn clear_playlist(&self) -> Result<(), Self::Error>;

    async fn play_media(&self, media_type: &MediaType, media_id: &str) -> Result<(), Self::Error>;

    async fn browse_media(
        &self,
        media_content_type: Option<&MediaType>,
        media_content_id: Option<&str>,
    ) -> Result<BrowseMedia, Self::Error>;
}
