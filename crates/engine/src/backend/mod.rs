//! Abstract interface for platform display query and pixel grab.

use std::sync::Arc;

use image::RgbaImage;
use screenspan_common::error::ScreenspanResult;
use screenspan_platform_core::{MonitorInfo, Rect};

/// The pixel-grab capability bound to one monitor.
///
/// One call is one attempt; retries are the caller's decision.
pub trait Grabber: Send + Sync {
    /// Grab the pixels of `rect`, given in global coordinates.
    fn grab(&self, rect: Rect) -> ScreenspanResult<RgbaImage>;
}

/// Abstract interface for the platform display layer.
pub trait DisplayBackend: Send + Sync {
    /// Current monitor list, in the platform's stable enumeration order.
    fn monitors(&self) -> ScreenspanResult<Vec<MonitorInfo>>;

    /// Construct the pixel-grab capability for the monitor at
    /// `monitor_index` in enumeration order. Failure here marks the
    /// owning handle as capture-degraded; it is not fatal.
    fn grabber(&self, monitor_index: usize) -> ScreenspanResult<Box<dyn Grabber>>;
}

pub mod desktop;

pub use desktop::DesktopBackend;

/// Get the platform backend for this process.
pub fn default_backend() -> Arc<dyn DisplayBackend> {
    Arc::new(DesktopBackend::new())
}
