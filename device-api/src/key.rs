//! Entity key type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier addressing one entity within a multi-entity device
///
/// The connection layer assigns keys at discovery time; this crate never
/// interprets them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityKey(u32);

impl EntityKey {
    pub fn new(key: u32) -> Self {
        Self(key)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntityKey {
    fn from(key: u32) -> Self {
        EntityKey::new(key)
    }
}
