//! Media player entity backed by a device client
//!
//! `MediaPlayerAdapter` is the seam between the two vocabularies:
//! - properties read the latest device snapshot and translate it for the host
//! - commands turn host calls into exactly one device command request
//!
//! The adapter keeps no state of its own beyond the snapshot and capability
//! descriptor it is handed by the connection layer.

use std::sync::Arc;

use async_trait::async_trait;
use device_api::{
    DeviceClient, EntityKey, MediaPlayerCommand, MediaPlayerCommandRequest, MediaPlayerEntityState,
    MediaPlayerInfo,
};
use host_model::{
    is_media_source_id, BrowseMedia, MediaPlayerDeviceClass, MediaPlayerEntity,
    MediaPlayerEntityFeature, MediaPlayerState, MediaSource, MediaType, PlayMediaUrlProcessor,
    RepeatMode,
};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::config::AdapterConfig;
use crate::error::{AdapterError, Result};
use crate::features::project_features;
use crate::mapping::{PLAY_STATES, REPEAT_MODES};
use crate::state::StateSlot;

/// Host media player entity for one device-protocol media player
///
/// # Type Parameters
///
/// - `C`: client used to submit commands to the device
/// - `M`: host media source used for `media-source://` ids and browsing
///
/// # Example
///
/// ```rust,ignore
/// let adapter = MediaPlayerAdapter::new(info, client, media_source);
///
/// // Connection layer pushes snapshots as they arrive
/// adapter.apply_state(snapshot);
///
/// // Host reads properties and issues commands
/// let state = adapter.state()?;
/// adapter.set_repeat(RepeatMode::All).await?;
/// ```
pub struct MediaPlayerAdapter<C, M> {
    client: C,
    media_source: M,
    static_info: RwLock<Arc<MediaPlayerInfo>>,
    state: StateSlot,
    url_processor: PlayMediaUrlProcessor,
    config: AdapterConfig,
}

impl<C, M> MediaPlayerAdapter<C, M>
where
    C: DeviceClient,
    M: MediaSource,
{
    /// Create an adapter with the default configuration
    pub fn new(static_info: MediaPlayerInfo, client: C, media_source: M) -> Self {
        Self::with_config(static_info, client, media_source, AdapterConfig::default())
    }

    pub fn with_config(
        static_info: MediaPlayerInfo,
        client: C,
        media_source: M,
        config: AdapterConfig,
    ) -> Self {
        Self {
            client,
            media_source,
            static_info: RwLock::new(Arc::new(static_info)),
            state: StateSlot::new(),
            url_processor: config.url_processor(),
            config,
        }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Key addressing this entity on the device
    pub fn key(&self) -> EntityKey {
        self.static_info.read().key
    }

    /// Current capability descriptor
    pub fn static_info(&self) -> Arc<MediaPlayerInfo> {
        self.static_info.read().clone()
    }

    pub fn name(&self) -> String {
        self.static_info.read().name.clone()
    }

    pub fn unique_id(&self) -> String {
        self.static_info.read().unique_id.clone()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.config.entity_id.as_deref()
    }

    /// Whether a state snapshot is available
    pub fn available(&self) -> bool {
        !self.state.is_empty()
    }

    // ========================================================================
    // Connection layer hooks
    // ========================================================================

    /// Replace the current snapshot
    ///
    /// Snapshots addressed to another entity are ignored and `false` is
    /// returned.
    pub fn apply_state(&self, state: MediaPlayerEntityState) -> bool {
        // Held until the snapshot is stored so a concurrent descriptor swap
        // cannot slip in between the key check and the replace.
        let static_info = self.static_info.read();
        let key = static_info.key;
        if state.key != key {
            warn!(
                "Ignoring media player state for entity {} on adapter for entity {}",
                state.key, key
            );
            return false;
        }

        debug!(key = %key, state = ?state.state, "Media player state updated");
        self.state.replace(state);
        true
    }

    /// Drop the current snapshot, making every state property absent
    pub fn clear_state(&self) {
        if self.state.clear().is_some() {
            debug!(key = %self.key(), "Media player state cleared");
        }
    }

    /// Replace the capability descriptor after the device is rediscovered
    ///
    /// If the key changes, the snapshot of the old entity is dropped.
    pub fn apply_static_info(&self, static_info: MediaPlayerInfo) {
        let new_key = static_info.key;
        let old_key = {
            let mut current = self.static_info.write();
            let old_key = current.key;
            *current = Arc::new(static_info);
            if old_key != new_key {
                self.state.clear();
            }
            old_key
        };

        info!(
            "Media player descriptor replaced for entity {} (was {})",
            new_key, old_key
        );
    }

    // ========================================================================
    // Command plumbing
    // ========================================================================

    fn snapshot(&self) -> Option<Arc<MediaPlayerEntityState>> {
        self.state.load()
    }

    fn request(&self) -> MediaPlayerCommandRequest {
        MediaPlayerCommandRequest::new(self.key())
    }

    async fn send(&self, request: MediaPlayerCommandRequest) -> Result<()> {
        debug!(
            key = %request.key,
            command = ?request.command,
            "Sending media player command"
        );
        self.client.media_player_command(request).await?;
        Ok(())
    }

    async fn send_command(&self, command: MediaPlayerCommand) -> Result<()> {
        self.send(self.request().command(command)).await
    }
}

#[async_trait]
impl<C, M> MediaPlayerEntity for MediaPlayerAdapter<C, M>
where
    C: DeviceClient,
    M: MediaSource,
{
    type Error = AdapterError;

    fn state(&self) -> Result<Option<MediaPlayerState>> {
        let Some(snapshot) = self.snapshot() else {
            return Ok(None);
        };
        let state = PLAY_STATES.from_device(snapshot.state).inspect_err(|err| {
            warn!(key = %snapshot.key, "Unmapped media player state: {}", err);
        })?;
        Ok(Some(state))
    }

    fn volume_level(&self) -> Option<f32> {
        self.snapshot().map(|s| s.volume)
    }

    fn is_volume_muted(&self) -> Option<bool> {
        self.snapshot().map(|s| s.muted)
    }

    fn source(&self) -> Option<String> {
        self.snapshot().and_then(|s| s.source.clone())
    }

    fn source_list(&self) -> Option<Vec<String>> {
        self.snapshot().map(|s| s.source_list.clone())
    }

    fn sound_mode(&self) -> Option<String> {
        self.snapshot().and_then(|s| s.sound_mode.clone())
    }

    fn sound_mode_list(&self) -> Option<Vec<String>> {
        self.snapshot().map(|s| s.sound_mode_list.clone())
    }

    fn repeat(&self) -> Result<Option<RepeatMode>> {
        let Some(snapshot) = self.snapshot() else {
            return Ok(None);
        };
        let repeat = REPEAT_MODES.from_device(snapshot.repeat_mode).inspect_err(|err| {
            warn!(key = %snapshot.key, "Unmapped repeat mode: {}", err);
        })?;
        Ok(Some(repeat))
    }

    /// Recomputed from the current descriptor on every call
    fn supported_features(&self) -> MediaPlayerEntityFeature {
        project_features(&self.static_info.read())
    }

    fn device_class(&self) -> Option<MediaPlayerDeviceClass> {
        Some(self.config.device_class)
    }

    async fn media_play(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::Play).await
    }

    async fn media_pause(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::Pause).await
    }

    async fn media_stop(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::Stop).await
    }

    async fn media_seek(&self, position: f32) -> Result<()> {
        self.send(
            self.request()
                .command(MediaPlayerCommand::Seek)
                .seek_position(position),
        )
        .await
    }

    async fn media_next_track(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::NextTrack).await
    }

    async fn media_previous_track(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::PreviousTrack).await
    }

    async fn set_volume_level(&self, volume: f32) -> Result<()> {
        self.send(
            self.request()
                .command(MediaPlayerCommand::VolumeSet)
                .volume_level(volume),
        )
        .await
    }

    async fn mute_volume(&self, mute: bool) -> Result<()> {
        let command = if mute {
            MediaPlayerCommand::Mute
        } else {
            MediaPlayerCommand::Unmute
        };
        self.send_command(command).await
    }

    async fn volume_up(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::VolumeUp).await
    }

    async fn volume_down(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::VolumeDown).await
    }

    async fn turn_on(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::TurnOn).await
    }

    async fn turn_off(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::TurnOff).await
    }

    async fn select_source(&self, source: &str) -> Result<()> {
        self.send(
            self.request()
                .command(MediaPlayerCommand::SelectSource)
                .source(source),
        )
        .await
    }

    async fn select_sound_mode(&self, sound_mode: &str) -> Result<()> {
        self.send(
            self.request()
                .command(MediaPlayerCommand::SelectSoundMode)
                .sound_mode(sound_mode),
        )
        .await
    }

    async fn set_shuffle(&self, shuffle: bool) -> Result<()> {
        self.send(
            self.request()
                .command(MediaPlayerCommand::ShuffleSet)
                .shuffle_set(shuffle),
        )
        .await
    }

    async fn set_repeat(&self, repeat: RepeatMode) -> Result<()> {
        let repeat = REPEAT_MODES.from_host(repeat)?;
        self.send(
            self.request()
                .command(MediaPlayerCommand::RepeatSet)
                .repeat(repeat),
        )
        .await
    }

    async fn clear_playlist(&self) -> Result<()> {
        self.send_command(MediaPlayerCommand::ClearPlaylist).await
    }

    /// Play a URL or a `media-source://` id
    ///
    /// Media source ids are resolved to a URL first. The request carries only
    /// the URL; the device treats a bare `media_url` as "play this".
    async fn play_media(&self, media_type: &MediaType, media_id: &str) -> Result<()> {
        let media_url = if is_media_source_id(media_id) {
            let resolved = self
                .media_source
                .resolve_media(media_id, self.entity_id())
                .await?;
            debug!(media_id, url = %resolved.url, "Resolved media source id");
            resolved.url
        } else {
            media_id.to_string()
        };

        let media_url = self.url_processor.process(&media_url)?;
        debug!(media_type = %media_type, %media_url, "Playing media");

        self.send(self.request().media_url(media_url)).await
    }

    async fn browse_media(
        &self,
        _media_content_type: Option<&MediaType>,
        media_content_id: Option<&str>,
    ) -> Result<BrowseMedia> {
        let filter = self.config.content_filter();
        let browse = self
            .media_source
            .browse_media(media_content_id, &filter)
            .await?;
        Ok(browse)
    }
}
