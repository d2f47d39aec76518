//! Bidirectional enum mapping between device and host vocabularies
//!
//! A mapping table pairs every device-side value with exactly one host-side
//! value. Lookups in either direction are pure; a value that is not in the
//! table is an error naming that value, never a silent default.

use std::any::type_name;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::LazyLock;

use device_api::{MediaPlayerRepeatMode, MediaPlayerState as DeviceState};
use host_model::{MediaPlayerState, RepeatMode};

use crate::error::{DuplicateMappingError, UnmappedValueError};

/// Device play state <-> host media player state
///
/// The device's `None` state has no host counterpart.
pub static PLAY_STATES: LazyLock<EnumMapper<DeviceState, MediaPlayerState>> =
    LazyLock::new(|| {
        EnumMapper::new(&[
            (DeviceState::Idle, MediaPlayerState::Idle),
            (DeviceState::Playing, MediaPlayerState::Playing),
            (DeviceState::Paused, MediaPlayerState::Paused),
            (DeviceState::On, MediaPlayerState::On),
            (DeviceState::Off, MediaPlayerState::Off),
            (DeviceState::Standby, MediaPlayerState::Standby),
            (DeviceState::Buffering, MediaPlayerState::Buffering),
        ])
    });

/// Device repeat mode <-> host repeat mode
pub static REPEAT_MODES: LazyLock<EnumMapper<MediaPlayerRepeatMode, RepeatMode>> =
    LazyLock::new(|| {
        EnumMapper::new(&[
            (MediaPlayerRepeatMode::Off, RepeatMode::Off),
            (MediaPlayerRepeatMode::One, RepeatMode::One),
            (MediaPlayerRepeatMode::All, RepeatMode::All),
        ])
    });

/// Two-way lookup table between a device enum `D` and a host enum `H`
#[derive(Debug, Clone)]
pub struct EnumMapper<D, H> {
    to_host: HashMap<D, H>,
    to_device: HashMap<H, D>,
}

impl<D, H> EnumMapper<D, H>
where
    D: Copy + Eq + Hash + Debug,
    H: Copy + Eq + Hash + Debug,
{
    /// Build a table from static pairs
    ///
    /// # Panics
    ///
    /// Panics if a value appears twice on either side. Use [`EnumMapper::try_new`]
    /// for tables that are not fixed at compile time.
    pub fn new(pairs: &[(D, H)]) -> Self {
        match Self::try_new(pairs) {
            Ok(mapper) => mapper,
            Err(err) => panic!("invalid enum mapping table: {err}"),
        }
    }

    /// Build a table, rejecting pairs that would make it non-bijective
    pub fn try_new(pairs: &[(D, H)]) -> Result<Self, DuplicateMappingError> {
        let mut to_host = HashMap::with_capacity(pairs.len());
        let mut to_device = HashMap::with_capacity(pairs.len());

        for &(device, host) in pairs {
            if to_host.insert(device, host).is_some() {
                return Err(DuplicateMappingError {
                    enum_name: short_type_name::<D>(),
                    value: format!("{:?}", device),
                });
            }
            if to_device.insert(host, device).is_some() {
                return Err(DuplicateMappingError {
                    enum_name: short_type_name::<H>(),
                    value: format!("{:?}", host),
                });
            }
        }

        Ok(Self { to_host, to_device })
    }

    /// Translate a device value into the host vocabulary
    pub fn from_device(&self, value: D) -> Result<H, UnmappedValueError> {
        self.to_host.get(&value).copied().ok_or_else(|| UnmappedValueError {
            enum_name: short_type_name::<D>(),
            value: format!("{:?}", value),
        })
    }

    /// Translate a host value into the device vocabulary
    pub fn from_host(&self, value: H) -> Result<D, UnmappedValueError> {
        self.to_device.get(&value).copied().ok_or_else(|| UnmappedValueError {
            enum_name: short_type_name::<H>(),
            value: format!("{:?}", value),
        })
    }

    /// Number of mapped pairs
    pub fn len(&self) -> usize {
        self.to_host.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_host.is_empty()
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
