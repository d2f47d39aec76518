//! Domain enums for media player entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Media player state as the host presents it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPlayerState {
    Off,
    On,
    Idle,
    Playing,
    Paused,
    Standby,
    Buffering,
}

impl MediaPlayerState {
    /// State string used in host state records
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaPlayerState::Off => "off",
            MediaPlayerState::On => "on",
            MediaPlayerState::Idle => "idle",
            MediaPlayerState::Playing => "playing",
            MediaPlayerState::Paused => "paused",
            MediaPlayerState::Standby => "standby",
            MediaPlayerState::Buffering => "buffering",
        }
    }
}

impl fmt::Display for MediaPlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repeat mode as the host presents it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    Off,
    One,
    All,
}

impl RepeatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::One => "one",
            RepeatMode::All => "all",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device class shown by the host for a media player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPlayerDeviceClass {
    Tv,
    #[default]
    Speaker,
    Receiver,
}

/// Content type passed along with a play-media request
///
/// Well-known types have their own variant; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    Music,
    Playlist,
    Channel,
    Url,
    Other(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Music => "music",
            MediaType::Playlist => "playlist",
            MediaType::Channel => "channel",
            MediaType::Url => "url",
            MediaType::Other(other) => other,
        }
    }
}

impl From<&str> for MediaType {
    fn from(s: &str) -> Self {
        match s {
            "music" => MediaType::Music,
            "playlist" => MediaType::Playlist,
            "channel" => MediaType::Channel,
            "url" => MediaType::Url,
            other => MediaType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_strings() {
        assert_eq!(MediaPlayerState::Playing.to_string(), "playing");
        assert_eq!(
            serde_json::to_string(&MediaPlayerState::Buffering).unwrap(),
            "\"buffering\""
        );
    }

    #[test]
    fn test_default_device_class_is_speaker() {
        assert_eq!(MediaPlayerDeviceClass::default(), MediaPlayerDeviceClass::Speaker);
    }

    #[test]
    fn test_media_type_from_str() {
        assert_eq!(MediaType::from("music"), MediaType::Music);
        assert_eq!(
            MediaType::from("audio/mpeg"),
            MediaType::Other("audio/mpeg".to_string())
        );
        assert_eq!(MediaType::from("audio/mpeg").as_str(), "audio/mpeg");
    }
}
