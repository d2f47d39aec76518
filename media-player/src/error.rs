//! Error types for the media player adapter

use device_api::ApiError;
use host_model::MediaSourceError;
use thiserror::Error;

/// A device or host enum value with no counterpart in a mapping table
///
/// Indicates the device speaks a protocol revision the table does not know.
/// It is never replaced by a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No mapping for {enum_name} value {value}")]
pub struct UnmappedValueError {
    /// Name of the enum the value belongs to
    pub enum_name: &'static str,
    /// Debug rendering of the offending value
    pub value: String,
}

/// A mapping table whose pairs are not one-to-one
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{enum_name} value {value} appears more than once in the mapping table")]
pub struct DuplicateMappingError {
    pub enum_name: &'static str,
    pub value: String,
}

/// Errors surfaced by media player adapter properties and commands
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The device reported a value the mapping tables do not cover
    #[error(transparent)]
    Unmapped(#[from] UnmappedValueError),

    /// The device client failed; passed through as reported
    #[error(transparent)]
    Device(#[from] ApiError),

    /// The host media source failed to resolve or browse media
    #[error(transparent)]
    MediaSource(#[from] MediaSourceError),
}

/// Type alias for results that can return an AdapterError
pub type Result<T> = std::result::Result<T, AdapterError>;
