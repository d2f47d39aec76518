//! Logging setup for hosts embedding mediabridge
//!
//! The adapter only emits `tracing` events. A host that does not install its
//! own subscriber can call [`init_logging_from_env`] once at startup:
//!
//! ```rust,no_run
//! fn main() -> Result<(), mediabridge::logging::LoggingError> {
//!     // MEDIABRIDGE_LOG_MODE=development MEDIABRIDGE_LOG_LEVEL=mediabridge=debug
//!     mediabridge::logging::init_logging_from_env()?;
//!     Ok(())
//! }
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Environment variable selecting the [`LoggingMode`]
pub const LOG_MODE_ENV: &str = "MEDIABRIDGE_LOG_MODE";

/// Environment variable overriding the filter directives
pub const LOG_LEVEL_ENV: &str = "MEDIABRIDGE_LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggingMode {
    /// Leave the global subscriber alone
    #[default]
    Silent,
    /// Compact one-line events on stderr
    Development,
    /// Multi-line events with thread ids and source locations
    Debug,
}

impl LoggingMode {
    /// Parse a `MEDIABRIDGE_LOG_MODE` value; unknown values mean `Silent`
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("development") => Self::Development,
            Some(v) if v.eq_ignore_ascii_case("debug") => Self::Debug,
            _ => Self::Silent,
        }
    }

    /// Filter used when neither `MEDIABRIDGE_LOG_LEVEL` nor `RUST_LOG` is set
    pub fn default_directives(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Development => "mediabridge=info",
            Self::Debug => "mediabridge=debug,device_api=debug,host_model=debug",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Install a global subscriber for `mode`
///
/// Fails if another subscriber was installed first.
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    let filter = env_filter(mode);
    let result = match mode {
        LoggingMode::Silent => return Ok(()),
        LoggingMode::Development => Registry::default()
            .with(fmt::layer().with_target(false).compact())
            .with(filter)
            .try_init(),
        LoggingMode::Debug => Registry::default()
            .with(
                fmt::layer()
                    .pretty()
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init(),
    };
    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Install a subscriber chosen by `MEDIABRIDGE_LOG_MODE`
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = LoggingMode::from_env_value(std::env::var(LOG_MODE_ENV).ok().as_deref());
    init_logging(mode)
}

pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

fn env_filter(mode: LoggingMode) -> EnvFilter {
    let directives = std::env::var(LOG_LEVEL_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| mode.default_directives().to_string());
    EnvFilter::new(directives)
}
