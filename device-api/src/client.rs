//! Client contract for submitting commands to a device

use std::sync::Arc;

use async_trait::async_trait;

use crate::{MediaPlayerCommandRequest, Result};

/// Connection to a device that can execute media player commands
///
/// Implementations own the transport, session handling and any reconnection
/// policy. Each call submits exactly one request and resolves once the device
/// has accepted or refused it.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    /// Submit a media player command to the device
    async fn media_player_command(&self, request: MediaPlayerCommandRequest) -> Result<()>;
}

#[async_trait]
impl<T: DeviceClient + ?Sized> DeviceClient for Arc<T> {
    async fn media_player_command(&self, request: MediaPlayerCommandRequest) -> Result<()> {
        (**self).media_player_command(request).await
    }
}
