//! Tests for the DeviceClient contract as seen from a caller holding a shared client.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use device_api::{
    ApiError, DeviceClient, EntityKey, MediaPlayerCommand, MediaPlayerCommandRequest, Result,
};

/// Client that records requests and refuses everything once disconnected.
#[derive(Default)]
struct RecordingClient {
    requests: Mutex<Vec<MediaPlayerCommandRequest>>,
    disconnected: bool,
}

#[async_trait]
impl DeviceClient for RecordingClient {
    async fn media_player_command(&self, request: MediaPlayerCommandRequest) -> Result<()> {
        if self.disconnected {
            return Err(ApiError::Disconnected);
        }
        self.requests.lock().unwrap().push(request);
        Ok(())
    }
}

#[tokio::test]
async fn test_shared_client_forwards_to_inner() {
    let client = Arc::new(RecordingClient::default());
    let shared: Arc<dyn DeviceClient> = client.clone();

    let request = MediaPlayerCommandRequest::new(EntityKey::new(3)).command(MediaPlayerCommand::Stop);
    shared.media_player_command(request.clone()).await.unwrap();

    let recorded = client.requests.lock().unwrap();
    assert_eq!(recorded.as_slice(), &[request]);
}

#[tokio::test]
async fn test_errors_surface_to_caller() {
    let client = Arc::new(RecordingClient {
        disconnected: true,
        ..Default::default()
    });

    let result = client
        .media_player_command(MediaPlayerCommandRequest::new(EntityKey::new(3)))
        .await;

    assert!(matches!(result, Err(ApiError::Disconnected)));
    assert!(client.requests.lock().unwrap().is_empty());
}
