//! Feature flags a media player entity advertises to the host

bitflags::bitflags! {
    /// Optional operations supported by a media player entity
    ///
    /// Bit values are shared with the host's frontend and must not change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct MediaPlayerEntityFeature: u32 {
        const PAUSE = 1;
        const SEEK = 1 << 1;
        const VOLUME_SET = 1 << 2;
        const VOLUME_MUTE = 1 << 3;
        const PREVIOUS_TRACK = 1 << 4;
        const NEXT_TRACK = 1 << 5;

        const TURN_ON = 1 << 7;
        const TURN_OFF = 1 << 8;
        const PLAY_MEDIA = 1 << 9;
        const VOLUME_STEP = 1 << 10;
        const SELECT_SOURCE = 1 << 11;
        const STOP = 1 << 12;
        const CLEAR_PLAYLIST = 1 << 13;
        const PLAY = 1 << 14;
        const SHUFFLE_SET = 1 << 15;
        const SELECT_SOUND_MODE = 1 << 16;
        const BROWSE_MEDIA = 1 << 17;
        const REPEAT_SET = 1 << 18;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_bit_values() {
        assert_eq!(MediaPlayerEntityFeature::PAUSE.bits(), 1);
        assert_eq!(MediaPlayerEntityFeature::TURN_ON.bits(), 128);
        assert_eq!(MediaPlayerEntityFeature::PLAY_MEDIA.bits(), 512);
        assert_eq!(MediaPlayerEntityFeature::BROWSE_MEDIA.bits(), 131_072);
        assert_eq!(MediaPlayerEntityFeature::REPEAT_SET.bits(), 262_144);
    }

    #[test]
    fn test_flags_are_distinct() {
        let total: u32 = MediaPlayerEntityFeature::all()
            .iter()
            .map(|flag| flag.bits())
            .sum();
        assert_eq!(total, MediaPlayerEntityFeature::all().bits());
    }
}
