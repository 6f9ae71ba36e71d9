//! Desktop backend wired to the `xcap`-based platform layer.

use image::RgbaImage;
use screenspan_common::error::{ScreenspanError, ScreenspanResult};
use screenspan_platform_core::{MonitorInfo, Rect};
use screenspan_platform_desktop as platform;

use super::{DisplayBackend, Grabber};

/// Display backend backed by the OS display query and screenshot
/// primitive.
#[derive(Debug, Default)]
pub struct DesktopBackend;

impl DesktopBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayBackend for DesktopBackend {
    fn monitors(&self) -> ScreenspanResult<Vec<MonitorInfo>> {
        platform::detect_monitors()
    }

    fn grabber(&self, monitor_index: usize) -> ScreenspanResult<Box<dyn Grabber>> {
        if !platform::is_capture_available() {
            return Err(ScreenspanError::capture_unavailable(
                monitor_index,
                "screen capture primitive is not available on this system",
            ));
        }
        Ok(Box::new(DesktopGrabber { monitor_index }))
    }
}

/// Grabs pixels from one monitor via the platform screenshot call.
struct DesktopGrabber {
    monitor_index: usize,
}

impl Grabber for DesktopGrabber {
    fn grab(&self, rect: Rect) -> ScreenspanResult<RgbaImage> {
        platform::grab_monitor_rect(self.monitor_index, rect)
    }
}
