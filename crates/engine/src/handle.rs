//! One addressable monitor.

use std::fmt;
use std::sync::{Arc, Mutex};

use screenspan_common::error::{ScreenspanError, ScreenspanResult};
use screenspan_platform_core::{MonitorInfo, Point, Rect, Region};

use crate::backend::{DisplayBackend, Grabber};
use crate::capture::CaptureResult;
use crate::select::InteractiveSelector;

/// A handle to one physical monitor.
///
/// Handles are built exclusively by the registry, one per id per
/// generation, and shared by reference. Geometry captured at
/// construction time is used for coordinate translation so all
/// translations within a generation agree; [`MonitorHandle::bounds`]
/// re-queries the platform for callers that want hot-plug-fresh
/// geometry.
pub struct MonitorHandle {
    id: usize,
    name: String,
    rect: Rect,
    scale_factor: f64,
    backend: Arc<dyn DisplayBackend>,
    grabber: Option<Box<dyn Grabber>>,
    last_capture: Mutex<Option<CaptureResult>>,
}

impl MonitorHandle {
    /// Registry-only constructor. A failing grabber construction leaves
    /// the handle capture-degraded rather than failing enumeration;
    /// captures on it report `CaptureUnavailable`.
    pub(crate) fn new(id: usize, info: &MonitorInfo, backend: Arc<dyn DisplayBackend>) -> Self {
        let grabber = match backend.grabber(id) {
            Ok(grabber) => Some(grabber),
            Err(e) => {
                tracing::error!(monitor = id, error = %e, "Cannot initialize capture for monitor");
                None
            }
        };

        Self {
            id,
            name: info.name.clone(),
            rect: info.bounds,
            scale_factor: info.scale_factor,
            backend,
            grabber,
            last_capture: Mutex::new(None),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Current platform bounds, queried live so hot-plug geometry
    /// changes within a generation are visible. Falls back to the
    /// construction-time rectangle when the platform query fails or no
    /// longer knows this id.
    pub fn bounds(&self) -> Rect {
        self.backend
            .monitors()
            .ok()
            .and_then(|monitors| monitors.get(self.id).map(|m| m.bounds))
            .unwrap_or(self.rect)
    }

    /// This monitor's full area as a region value (construction-time
    /// geometry).
    pub fn region(&self) -> Region {
        Region::new(self.rect, self.id)
    }

    /// Whether the capture primitive was constructible for this
    /// monitor.
    pub fn is_capture_available(&self) -> bool {
        self.grabber.is_some()
    }

    /// Translate a point given as an offset within this monitor's frame
    /// into global coordinates.
    pub fn to_point(&self, p: Point) -> Point {
        p.offset(self.rect.x, self.rect.y)
    }

    /// Express a global point as an offset within this monitor's frame.
    /// Inverse of [`MonitorHandle::to_point`].
    pub fn to_local(&self, p: Point) -> Point {
        p.offset(-self.rect.x, -self.rect.y)
    }

    /// Build a region of the given size anchored at `p`, where `p` is
    /// an offset within this monitor's frame. The resulting rectangle
    /// is in global coordinates.
    pub fn to_region(&self, p: Point, width: i32, height: i32) -> Region {
        let origin = self.to_point(p);
        Region::new(Rect::new(origin.x, origin.y, width, height), self.id)
    }

    /// Capture this monitor's full bounds.
    pub fn capture(&self) -> ScreenspanResult<CaptureResult> {
        self.capture_rect(self.rect)
    }

    /// Capture an explicit rectangle given in global coordinates.
    ///
    /// A zero-area or negative-size rectangle is rejected with
    /// `InvalidRegion`; it is never clamped. One grab attempt is made;
    /// the result is recorded as this handle's last capture.
    pub fn capture_rect(&self, rect: Rect) -> ScreenspanResult<CaptureResult> {
        if rect.is_empty() {
            return Err(ScreenspanError::invalid_region(rect.w, rect.h));
        }

        let grabber = self.grabber.as_ref().ok_or_else(|| {
            ScreenspanError::capture_unavailable(self.id, "capture primitive failed to initialize")
        })?;

        let image = grabber
            .grab(rect)
            .map_err(|e| ScreenspanError::capture_unavailable(self.id, e.to_string()))?;

        tracing::debug!(monitor = self.id, ?rect, "Captured");

        let result = CaptureResult::new(image, rect, self.id);
        if let Ok(mut slot) = self.last_capture.lock() {
            *slot = Some(result.clone());
        }
        Ok(result)
    }

    /// Capture an explicit region (global coordinates).
    pub fn capture_region(&self, region: &Region) -> ScreenspanResult<CaptureResult> {
        self.capture_rect(region.rect())
    }

    /// Capture a rectangle anchored at `(x, y)` within this monitor's
    /// frame.
    pub fn capture_area(&self, x: i32, y: i32, width: i32, height: i32) -> ScreenspanResult<CaptureResult> {
        self.capture_region(&self.to_region(Point::new(x, y), width, height))
    }

    /// The most recent capture taken through this handle, kept for
    /// convenience and debugging only.
    pub fn last_capture(&self) -> Option<CaptureResult> {
        self.last_capture.lock().ok().and_then(|slot| slot.clone())
    }

    /// Interactive capture: let the user drag a rectangle on this
    /// monitor. `None` means the user cancelled or the wait timed out.
    pub fn user_capture(
        &self,
        selector: &InteractiveSelector,
        message: Option<&str>,
    ) -> ScreenspanResult<Option<CaptureResult>> {
        selector.user_capture(self, message)
    }

    /// Interactive region selection: [`MonitorHandle::user_capture`]
    /// plus extraction of the drawn rectangle.
    pub fn select_region(
        &self,
        selector: &InteractiveSelector,
        message: Option<&str>,
    ) -> ScreenspanResult<Option<Region>> {
        Ok(self
            .user_capture(selector, message)?
            .map(|capture| capture.region_of_interest()))
    }
}

impl fmt::Display for MonitorHandle {
    /// Short form like `S(0)[0,0 1920x1080]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S({})[{},{} {}x{}]",
            self.id, self.rect.x, self.rect.y, self.rect.w, self.rect.h
        )
    }
}

impl fmt::Debug for MonitorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitorHandle")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("rect", &self.rect)
            .field("capture_available", &self.grabber.is_some())
            .finish()
    }
}
