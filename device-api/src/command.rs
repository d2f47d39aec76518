//! Outbound media player command requests

use serde::{Deserialize, Serialize};

use crate::{EntityKey, MediaPlayerRepeatMode};

define_wire_enum! {
    /// Command discriminant carried by a request
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum MediaPlayerCommand {
        Play = 0,
        Pause = 1,
        Stop = 2,
        Mute = 3,
        Unmute = 4,
        VolumeSet = 5,
        VolumeUp = 6,
        VolumeDown = 7,
        Seek = 8,
        NextTrack = 9,
        PreviousTrack = 10,
        TurnOn = 11,
        TurnOff = 12,
        SelectSource = 13,
        SelectSoundMode = 14,
        ShuffleSet = 15,
        RepeatSet = 16,
        ClearPlaylist = 17,
    }
}

/// A single command addressed to one media player entity
///
/// The command discriminant is optional on the wire: a request that only
/// carries `media_url` asks the device to play that URL. Parameters that are
/// `None` are omitted from the encoded request.
///
/// # Example
/// ```rust
/// use device_api::{EntityKey, MediaPlayerCommand, MediaPlayerCommandRequest};
///
/// let request = MediaPlayerCommandRequest::new(EntityKey::new(7))
///     .command(MediaPlayerCommand::VolumeSet)
///     .volume_level(0.4);
///
/// assert_eq!(request.command, Some(MediaPlayerCommand::VolumeSet));
/// assert_eq!(request.volume_level, Some(0.4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPlayerCommandRequest {
    pub key: EntityKey,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub command: Option<MediaPlayerCommand>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seek_position: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub volume_level: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sound_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shuffle_set: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub repeat: Option<MediaPlayerRepeatMode>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub media_url: Option<String>,
}

impl MediaPlayerCommandRequest {
    /// Start an empty request for the given entity
    pub fn new(key: EntityKey) -> Self {
        Self {
            key,
            command: None,
            seek_position: None,
            volume_level: None,
            source: None,
            sound_mode: None,
            shuffle_set: None,
            repeat: None,
            media_url: None,
        }
    }

    pub fn command(mut self, command: MediaPlayerCommand) -> Self {
        self.command = Some(command);
        self
    }

    /// Seek position in seconds
    pub fn seek_position(mut self, position: f32) -> Self {
        self.seek_position = Some(position);
        self
    }

    pub fn volume_level(mut self, level: f32) -> Self {
        self.volume_level = Some(level);
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn sound_mode(mut self, sound_mode: impl Into<String>) -> Self {
        self.sound_mode = Some(sound_mode.into());
        self
    }

    pub fn shuffle_set(mut self, shuffle: bool) -> Self {
        self.shuffle_set = Some(shuffle);
        self
    }

    pub fn repeat(mut self, repeat: MediaPlayerRepeatMode) -> Self {
        self.repeat = Some(repeat);
        self
    }

    pub fn media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }
}
