//! Holder for the latest state snapshot of an entity

use std::sync::Arc;

use device_api::MediaPlayerEntityState;
use parking_lot::RwLock;

/// Latest snapshot pushed by the connection layer, if any
///
/// Readers get an `Arc` to a whole snapshot and never hold the lock while
/// using it, so a replacement can never be observed half-applied.
#[derive(Debug, Default)]
pub struct StateSlot {
    current: RwLock<Option<Arc<MediaPlayerEntityState>>>,
}

impl StateSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, or `None` before the first one arrives
    pub fn load(&self) -> Option<Arc<MediaPlayerEntityState>> {
        self.current.read().clone()
    }

    /// Replace the snapshot, returning the previous one
    pub fn replace(&self, state: MediaPlayerEntityState) -> Option<Arc<MediaPlayerEntityState>> {
        self.current.write().replace(Arc::new(state))
    }

    /// Forget the snapshot, e.g. when the device disconnects
    pub fn clear(&self) -> Option<Arc<MediaPlayerEntityState>> {
        self.current.write().take()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use device_api::{EntityKey, MediaPlayerState};

    #[test]
    fn test_empty_until_first_snapshot() {
        let slot = StateSlot::new();
        assert!(slot.is_empty());
        assert!(slot.load().is_none());
    }

    #[test]
    fn test_replace_keeps_earlier_readers_consistent() {
        let slot = StateSlot::new();
        slot.replace(MediaPlayerEntityState {
            state: MediaPlayerState::Playing,
            ..MediaPlayerEntityState::new(EntityKey::new(1))
        });

        let before = slot.load().unwrap();
        let previous = slot.replace(MediaPlayerEntityState {
            state: MediaPlayerState::Paused,
            ..MediaPlayerEntityState::new(EntityKey::new(1))
        });

        assert_eq!(before.state, MediaPlayerState::Playing);
        assert!(Arc::ptr_eq(&before, &previous.unwrap()));
        assert_eq!(slot.load().unwrap().state, MediaPlayerState::Paused);
    }

    #[test]
    fn test_clear() {
        let slot = StateSlot::new();
        slot.replace(MediaPlayerEntityState::new(EntityKey::new(1)));
        assert!(slot.clear().is_some());
        assert!(slot.is_empty());
    }
}
