//! Shared fakes for engine tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use image::{Rgba, RgbaImage};
use screenspan_common::error::{ScreenspanError, ScreenspanResult};
use screenspan_platform_core::{MonitorInfo, Rect};

use crate::backend::{DisplayBackend, Grabber};

/// A display backend with a scriptable monitor list.
pub struct MockBackend {
    monitors: Mutex<Vec<MonitorInfo>>,
    enumeration_fails: AtomicBool,
    degraded: Mutex<HashSet<usize>>,
}

impl MockBackend {
    pub fn new(bounds: Vec<Rect>) -> Self {
        Self {
            monitors: Mutex::new(Self::infos(bounds)),
            enumeration_fails: AtomicBool::new(false),
            degraded: Mutex::new(HashSet::new()),
        }
    }

    fn infos(bounds: Vec<Rect>) -> Vec<MonitorInfo> {
        bounds
            .into_iter()
            .enumerate()
            .map(|(i, bounds)| MonitorInfo {
                name: format!("mock-{i}"),
                bounds,
                scale_factor: 1.0,
                is_primary: bounds.x == 0 && bounds.y == 0,
            })
            .collect()
    }

    /// Replace the reported monitor list (visible to live `bounds()`
    /// queries immediately, to the registry after a reset).
    pub fn set_monitors(&self, bounds: Vec<Rect>) {
        if let Ok(mut monitors) = self.monitors.lock() {
            *monitors = Self::infos(bounds);
        }
    }

    pub fn fail_enumeration(&self, fail: bool) {
        self.enumeration_fails.store(fail, Ordering::SeqCst);
    }

    /// Make grabber construction fail for one monitor, simulating a
    /// capture permission/driver failure.
    pub fn degrade_capture(&self, monitor_index: usize) {
        if let Ok(mut degraded) = self.degraded.lock() {
            degraded.insert(monitor_index);
        }
    }
}

impl DisplayBackend for MockBackend {
    fn monitors(&self) -> ScreenspanResult<Vec<MonitorInfo>> {
        if self.enumeration_fails.load(Ordering::SeqCst) {
            return Err(ScreenspanError::platform("mock enumeration failure"));
        }
        Ok(self
            .monitors
            .lock()
            .map(|monitors| monitors.clone())
            .unwrap_or_default())
    }

    fn grabber(&self, monitor_index: usize) -> ScreenspanResult<Box<dyn Grabber>> {
        let degraded = self
            .degraded
            .lock()
            .map(|d| d.contains(&monitor_index))
            .unwrap_or(false);
        if degraded {
            return Err(ScreenspanError::capture_unavailable(
                monitor_index,
                "mock grabber disabled",
            ));
        }
        Ok(Box::new(MockGrabber { monitor_index }))
    }
}

/// Returns a solid image of the requested size, tinted per monitor.
pub struct MockGrabber {
    monitor_index: usize,
}

impl Grabber for MockGrabber {
    fn grab(&self, rect: Rect) -> ScreenspanResult<RgbaImage> {
        Ok(RgbaImage::from_pixel(
            rect.w as u32,
            rect.h as u32,
            Rgba([self.monitor_index as u8, 0, 0, 255]),
        ))
    }
}
