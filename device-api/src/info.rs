//! Static capability descriptor

use serde::{Deserialize, Serialize};

use crate::EntityKey;

/// Static description of a media player entity
///
/// Sent once when the device is discovered. The `supports_*` flags declare
/// which optional commands the hardware understands; they never change for the
/// lifetime of the descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaPlayerInfo {
    pub key: EntityKey,
    pub object_id: String,
    pub name: String,
    pub unique_id: String,

    pub supports_pause: bool,
    pub supports_seek: bool,
    pub supports_volume_set: bool,
    pub supports_volume_mute: bool,
    pub supports_previous_track: bool,
    pub supports_next_track: bool,
    pub supports_turn_on: bool,
    pub supports_turn_off: bool,
    pub supports_play_media: bool,
    pub supports_volume_step: bool,
    pub supports_select_source: bool,
    pub supports_stop: bool,
    pub supports_clear_playlist: bool,
    pub supports_play: bool,
    pub supports_shuffle_set: bool,
    pub supports_select_sound_mode: bool,
    pub supports_repeat_set: bool,
}

impl MediaPlayerInfo {
    /// Create a descriptor with no optional capabilities
    pub fn new(key: EntityKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_unsupported() {
        let info: MediaPlayerInfo =
            serde_json::from_str(r#"{"key": 12, "name": "Kitchen", "supports_pause": true}"#).unwrap();
        assert_eq!(info.key, EntityKey::new(12));
        assert!(info.supports_pause);
        assert!(!info.supports_seek);
        assert!(!info.supports_play_media);
    }
}
