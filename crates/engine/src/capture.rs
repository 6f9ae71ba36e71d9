//! Captured pixel buffers and their global-coordinate provenance.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use image::RgbaImage;
use screenspan_platform_core::{Rect, Region};

/// The result of one capture: an immutable pixel buffer plus the global
/// rectangle it represents.
///
/// Cloning is cheap; the pixel buffer is shared.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    image: Arc<RgbaImage>,
    rect: Rect,
    monitor: usize,
    captured_at: DateTime<Utc>,
}

impl CaptureResult {
    pub(crate) fn new(image: RgbaImage, rect: Rect, monitor: usize) -> Self {
        Self {
            image: Arc::new(image),
            rect,
            monitor,
            captured_at: Utc::now(),
        }
    }

    /// The captured pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The rectangle this buffer represents, in global coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Id of the monitor the capture was taken through.
    pub fn monitor(&self) -> usize {
        self.monitor
    }

    /// The captured area as a region of the owning monitor.
    pub fn region_of_interest(&self) -> Region {
        Region::new(self.rect, self.monitor)
    }

    /// Wall-clock time the capture was taken.
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}
