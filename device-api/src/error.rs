use thiserror::Error;

use crate::EntityKey;

/// Errors raised by the device protocol layer
///
/// These are produced by `DeviceClient` implementations and by wire decoding.
/// Higher layers pass them through unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// The request could not be delivered, e.g. a socket write failed or the
    /// device stopped answering.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The device connection is not established
    ///
    /// Commands cannot be submitted until the connection layer reconnects.
    #[error("Device disconnected")]
    Disconnected,

    /// The device refused the command
    #[error("Command rejected by entity {key}: {reason}")]
    CommandRejected {
        key: EntityKey,
        reason: String,
    },

    /// A numeric enum code outside the protocol definition
    #[error("Unknown {enum_name} value: {value}")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: u32,
    },
}

impl ApiError {
    /// Create a command rejection error for the given entity
    pub fn rejected(key: EntityKey, reason: impl Into<String>) -> Self {
        Self::CommandRejected {
            key,
            reason: reason.into(),
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let network_err = ApiError::NetworkError("connection reset".to_string());
        assert_eq!(format!("{}", network_err), "Network error: connection reset");

        let rejected = ApiError::rejected(EntityKey::new(42), "busy");
        assert_eq!(format!("{}", rejected), "Command rejected by entity 42: busy");

        let unknown = ApiError::UnknownEnumValue {
            enum_name: "MediaPlayerState",
            value: 99,
        };
        assert_eq!(format!("{}", unknown), "Unknown MediaPlayerState value: 99");
    }

    #[test]
    fn test_disconnected_display() {
        assert_eq!(format!("{}", ApiError::Disconnected), "Device disconnected");
    }
}
