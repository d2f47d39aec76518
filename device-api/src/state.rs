//! Device-reported media player state

use serde::{Deserialize, Serialize};

use crate::EntityKey;

define_wire_enum! {
    /// Play state as reported by the device
    ///
    /// `None` is sent by firmware that has not produced a state yet.
    pub enum MediaPlayerState {
        None = 0,
        Idle = 1,
        Playing = 2,
        Paused = 3,
        On = 4,
        Off = 5,
        Standby = 6,
        Buffering = 7,
    }
}

define_wire_enum! {
    /// Repeat mode as understood by the device
    pub enum MediaPlayerRepeatMode {
        /// No repeat
        Off = 0,
        /// Repeat the current track
        One = 1,
        /// Repeat the whole playlist
        All = 2,
    }
}

/// Point-in-time state snapshot pushed by the device connection
///
/// Snapshots are immutable once received; the connection layer replaces them
/// wholesale whenever the device reports a change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPlayerEntityState {
    /// Entity this snapshot belongs to
    pub key: EntityKey,
    pub state: MediaPlayerState,
    /// Volume level (0.0 - 1.0)
    pub volume: f32,
    pub muted: bool,
    /// Currently selected source, if the device reports one
    pub source: Option<String>,
    pub source_list: Vec<String>,
    /// Currently selected sound mode, if the device reports one
    pub sound_mode: Option<String>,
    pub sound_mode_list: Vec<String>,
    pub repeat_mode: MediaPlayerRepeatMode,
}

impl MediaPlayerEntityState {
    /// Create an empty snapshot for the given entity
    pub fn new(key: EntityKey) -> Self {
        Self {
            key,
            state: MediaPlayerState::None,
            volume: 0.0,
            muted: false,
            source: None,
            source_list: Vec::new(),
            sound_mode: None,
            sound_mode_list: Vec::new(),
            repeat_mode: MediaPlayerRepeatMode::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;
    use rstest::rstest;

    #[rstest]
    #[case(0, MediaPlayerState::None)]
    #[case(1, MediaPlayerState::Idle)]
    #[case(2, MediaPlayerState::Playing)]
    #[case(3, MediaPlayerState::Paused)]
    #[case(7, MediaPlayerState::Buffering)]
    fn test_state_from_code(#[case] code: u32, #[case] expected: MediaPlayerState) {
        assert_eq!(MediaPlayerState::from_code(code).unwrap(), expected);
        assert_eq!(expected.code(), code);
    }

    #[test]
    fn test_unknown_state_code() {
        let err = MediaPlayerState::try_from(8).unwrap_err();
        assert!(matches!(
            err,
            ApiError::UnknownEnumValue { enum_name: "MediaPlayerState", value: 8 }
        ));
    }

    #[test]
    fn test_repeat_mode_codes() {
        assert_eq!(u32::from(MediaPlayerRepeatMode::Off), 0);
        assert_eq!(u32::from(MediaPlayerRepeatMode::One), 1);
        assert_eq!(u32::from(MediaPlayerRepeatMode::All), 2);
        assert!(MediaPlayerRepeatMode::from_code(3).is_err());
    }

    #[test]
    fn test_all_lists_every_variant_in_code_order() {
        let codes: Vec<u32> = MediaPlayerState::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, (0u32..=7).collect::<Vec<u32>>());
    }

    #[test]
    fn test_new_snapshot_is_empty() {
        let snapshot = MediaPlayerEntityState::new(EntityKey::new(1));
        assert_eq!(snapshot.state, MediaPlayerState::None);
        assert!(snapshot.source.is_none());
        assert!(snapshot.source_list.is_empty());
        assert_eq!(snapshot.repeat_mode, MediaPlayerRepeatMode::Off);
    }
}
