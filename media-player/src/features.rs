//! Projection of device capabilities onto host feature flags

use device_api::MediaPlayerInfo;
use host_model::MediaPlayerEntityFeature as Feature;

type CapabilityPredicate = fn(&MediaPlayerInfo) -> bool;

/// Capability field -> feature flags it enables
///
/// Play-media support also enables browsing, since browsing is only useful
/// for picking something to play.
const CAPABILITY_FLAGS: &[(CapabilityPredicate, Feature)] = &[
    (|info| info.supports_pause, Feature::PAUSE),
    (|info| info.supports_seek, Feature::SEEK),
    (|info| info.supports_volume_set, Feature::VOLUME_SET),
    (|info| info.supports_volume_mute, Feature::VOLUME_MUTE),
    (|info| info.supports_previous_track, Feature::PREVIOUS_TRACK),
    (|info| info.supports_next_track, Feature::NEXT_TRACK),
    (|info| info.supports_turn_on, Feature::TURN_ON),
    (|info| info.supports_turn_off, Feature::TURN_OFF),
    (
        |info| info.supports_play_media,
        Feature::PLAY_MEDIA.union(Feature::BROWSE_MEDIA),
    ),
    (|info| info.supports_volume_step, Feature::VOLUME_STEP),
    (|info| info.supports_select_source, Feature::SELECT_SOURCE),
    (|info| info.supports_stop, Feature::STOP),
    (|info| info.supports_clear_playlist, Feature::CLEAR_PLAYLIST),
    (|info| info.supports_play, Feature::PLAY),
    (|info| info.supports_shuffle_set, Feature::SHUFFLE_SET),
    (|info| info.supports_select_sound_mode, Feature::SELECT_SOUND_MODE),
    (|info| info.supports_repeat_set, Feature::REPEAT_SET),
];

/// Compute the host feature flags for a capability descriptor
pub fn project_features(info: &MediaPlayerInfo) -> Feature {
    CAPABILITY_FLAGS
        .iter()
        .filter(|(supported, _)| supported(info))
        .fold(Feature::empty(), |flags, (_, feature)| flags | *feature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use device_api::EntityKey;

    #[test]
    fn test_no_capabilities_projects_empty() {
        let info = MediaPlayerInfo::new(EntityKey::new(1), "Bare");
        assert!(project_features(&info).is_empty());
    }

    #[test]
    fn test_pause_and_play_media() {
        let info = MediaPlayerInfo {
            supports_pause: true,
            supports_play_media: true,
            ..MediaPlayerInfo::new(EntityKey::new(1), "Speaker")
        };
        assert_eq!(
            project_features(&info),
            Feature::PAUSE | Feature::PLAY_MEDIA | Feature::BROWSE_MEDIA
        );
    }

    #[test]
    fn test_every_capability_projects_every_flag() {
        let info = MediaPlayerInfo {
            supports_pause: true,
            supports_seek: true,
            supports_volume_set: true,
            supports_volume_mute: true,
            supports_previous_track: true,
            supports_next_track: true,
            supports_turn_on: true,
            supports_turn_off: true,
            supports_play_media: true,
            supports_volume_step: true,
            supports_select_source: true,
            supports_stop: true,
            supports_clear_playlist: true,
            supports_play: true,
            supports_shuffle_set: true,
            supports_select_sound_mode: true,
            supports_repeat_set: true,
            ..Default::default()
        };
        assert_eq!(project_features(&info), Feature::all());
    }

    #[test]
    fn test_table_entries_do_not_overlap() {
        let mut seen = Feature::empty();
        for (_, feature) in CAPABILITY_FLAGS {
            assert!(!seen.intersects(*feature), "{:?} listed twice", feature);
            seen |= *feature;
        }
    }
}
