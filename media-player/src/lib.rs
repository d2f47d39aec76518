//! # mediabridge - device media players as host entities
//!
//! Binds a device-protocol media player (see `device_api`) into the host's
//! media player entity model (see `host_model`):
//!
//! ```rust,ignore
//! use mediabridge::{MediaPlayerAdapter, MediaPlayerEntity, RepeatMode};
//!
//! let adapter = MediaPlayerAdapter::new(info, client, media_source);
//! adapter.apply_state(snapshot);
//!
//! println!("{:?} at volume {:?}", adapter.state()?, adapter.volume_level());
//! adapter.set_repeat(RepeatMode::All).await?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! host (MediaPlayerEntity calls)
//!     ↓
//! MediaPlayerAdapter (enum mapping, feature projection, command forwarding)
//!     ↓
//! DeviceClient (one command request per call)
//! ```
//!
//! The adapter adds no retries, timeouts or queuing: every command is a
//! single client call and its error is returned as-is.
//!
//! ## Logging
//!
//! Events are emitted through `tracing`. Hosts without their own subscriber
//! can opt in with [`logging::init_logging_from_env`].

pub mod adapter;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod mapping;
pub mod state;

pub use adapter::MediaPlayerAdapter;
pub use config::AdapterConfig;
pub use error::{AdapterError, DuplicateMappingError, Result, UnmappedValueError};
pub use features::project_features;
pub use logging::{init_logging, init_logging_from_env, LoggingMode};
pub use mapping::{EnumMapper, PLAY_STATES, REPEAT_MODES};
pub use state::StateSlot;

// Re-export the host-facing types needed to drive an adapter
pub use host_model::{
    BrowseMedia, MediaPlayerDeviceClass, MediaPlayerEntity, MediaPlayerEntityFeature,
    MediaPlayerState, MediaType, RepeatMode, PLATFORM_COMPONENT_KEY,
};
