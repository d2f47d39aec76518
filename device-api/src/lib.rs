//! Device protocol vocabulary for media player entities
//!
//! This crate describes what a media player device speaks: its enumerated
//! states and modes (with their numeric wire codes), the static capability
//! descriptor sent at discovery, the state snapshots pushed afterwards, and the
//! command requests a client submits. It has no transport of its own; the
//! `DeviceClient` trait is implemented by whatever owns the connection.
//!
//! ```rust
//! use device_api::{EntityKey, MediaPlayerCommand, MediaPlayerCommandRequest, MediaPlayerState};
//!
//! let state = MediaPlayerState::from_code(2)?;
//! assert_eq!(state, MediaPlayerState::Playing);
//!
//! let request = MediaPlayerCommandRequest::new(EntityKey::new(1))
//!     .command(MediaPlayerCommand::Pause);
//! assert_eq!(request.command, Some(MediaPlayerCommand::Pause));
//! # Ok::<(), device_api::ApiError>(())
//! ```

#[macro_use]
mod macros;

pub mod client;
pub mod command;
pub mod error;
pub mod info;
pub mod key;
pub mod state;

pub use client::DeviceClient;
pub use command::{MediaPlayerCommand, MediaPlayerCommandRequest};
pub use error::{ApiError, Result};
pub use info::MediaPlayerInfo;
pub use key::EntityKey;
pub use state::{MediaPlayerEntityState, MediaPlayerRepeatMode, MediaPlayerState};
