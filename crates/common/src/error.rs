//! Error types shared across Screenspan crates.

/// Top-level error type for Screenspan operations.
#[derive(Debug, thiserror::Error)]
pub enum ScreenspanError {
    #[error("Monitor id {id} not in valid range (0..{count})")]
    InvalidMonitorId { id: usize, count: usize },

    #[error("Capture unavailable on monitor {monitor}: {message}")]
    CaptureUnavailable { monitor: usize, message: String },

    #[error("Invalid capture region: {width}x{height} (width and height must be positive)")]
    InvalidRegion { width: i32, height: i32 },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ScreenspanError.
pub type ScreenspanResult<T> = Result<T, ScreenspanError>;

impl ScreenspanError {
    pub fn capture_unavailable(monitor: usize, msg: impl Into<String>) -> Self {
        Self::CaptureUnavailable {
            monitor,
            message: msg.into(),
        }
    }

    pub fn invalid_region(width: i32, height: i32) -> Self {
        Self::InvalidRegion { width, height }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
