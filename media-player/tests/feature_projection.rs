//! Property-based tests for capability -> feature flag projection.

use device_api::MediaPlayerInfo;
use mediabridge::{project_features, MediaPlayerEntityFeature as Feature};
use proptest::prelude::*;

type Enable = fn(&mut MediaPlayerInfo);

/// One setter per descriptor capability, with the flags it should add.
const CAPABILITIES: &[(Enable, Feature)] = &[
    (|i| i.supports_pause = true, Feature::PAUSE),
    (|i| i.supports_seek = true, Feature::SEEK),
    (|i| i.supports_volume_set = true, Feature::VOLUME_SET),
    (|i| i.supports_volume_mute = true, Feature::VOLUME_MUTE),
    (|i| i.supports_previous_track = true, Feature::PREVIOUS_TRACK),
    (|i| i.supports_next_track = true, Feature::NEXT_TRACK),
    (|i| i.supports_turn_on = true, Feature::TURN_ON),
    (|i| i.supports_turn_off = true, Feature::TURN_OFF),
    (
        |i| i.supports_play_media = true,
        Feature::PLAY_MEDIA.union(Feature::BROWSE_MEDIA),
    ),
    (|i| i.supports_volume_step = true, Feature::VOLUME_STEP),
    (|i| i.supports_select_source = true, Feature::SELECT_SOURCE),
    (|i| i.supports_stop = true, Feature::STOP),
    (|i| i.supports_clear_playlist = true, Feature::CLEAR_PLAYLIST),
    (|i| i.supports_play = true, Feature::PLAY),
    (|i| i.supports_shuffle_set = true, Feature::SHUFFLE_SET),
    (|i| i.supports_select_sound_mode = true, Feature::SELECT_SOUND_MODE),
    (|i| i.supports_repeat_set = true, Feature::REPEAT_SET),
];

const CAPABILITY_COUNT: usize = 17;

/// Set capability `index` on the descriptor and return the flags it should add.
fn enable_capability(info: &mut MediaPlayerInfo, index: usize) -> Feature {
    let (enable, flags) = CAPABILITIES[index];
    enable(info);
    flags
}

fn descriptor_from_mask(mask: u32) -> (MediaPlayerInfo, Feature) {
    let mut info = MediaPlayerInfo::default();
    let mut expected = Feature::empty();
    for index in 0..CAPABILITY_COUNT {
        if mask & (1 << index) != 0 {
            expected |= enable_capability(&mut info, index);
        }
    }
    (info, expected)
}

#[test]
fn test_table_covers_every_capability() {
    assert_eq!(CAPABILITIES.len(), CAPABILITY_COUNT);
}

#[test]
fn test_all_false_projects_to_zero() {
    assert_eq!(project_features(&MediaPlayerInfo::default()).bits(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any combination of capabilities projects to exactly the union of their flags.
    #[test]
    fn prop_projection_is_union_of_capabilities(mask in 0u32..(1 << CAPABILITY_COUNT)) {
        let (info, expected) = descriptor_from_mask(mask);
        prop_assert_eq!(project_features(&info), expected);
    }

    /// Enabling one more capability adds exactly its flags and keeps every other bit.
    #[test]
    fn prop_enabling_a_capability_is_monotonic(
        mask in 0u32..(1 << CAPABILITY_COUNT),
        index in 0..CAPABILITY_COUNT,
    ) {
        let mask = mask & !(1 << index);
        let (mut info, _) = descriptor_from_mask(mask);
        let before = project_features(&info);

        let added = enable_capability(&mut info, index);
        let after = project_features(&info);

        prop_assert!(!before.intersects(added));
        prop_assert_eq!(after, before | added);
    }
}
