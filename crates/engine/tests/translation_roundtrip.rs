//! Property tests for cross-monitor coordinate translation.

use std::sync::Arc;

use proptest::prelude::*;
use screenspan_common::error::{ScreenspanError, ScreenspanResult};
use screenspan_engine::{DisplayBackend, DisplayRegistry, Grabber, MonitorHandle};
use screenspan_platform_core::{MonitorInfo, Point, Rect};

/// Fixed monitor list with no capture capability; geometry only.
struct StaticBackend {
    monitors: Vec<MonitorInfo>,
}

impl StaticBackend {
    fn new(bounds: Vec<Rect>) -> Self {
        Self {
            monitors: bounds
                .into_iter()
                .enumerate()
                .map(|(i, bounds)| MonitorInfo {
                    name: format!("static-{i}"),
                    bounds,
                    scale_factor: 1.0,
                    is_primary: bounds.x == 0 && bounds.y == 0,
                })
                .collect(),
        }
    }
}

impl DisplayBackend for StaticBackend {
    fn monitors(&self) -> ScreenspanResult<Vec<MonitorInfo>> {
        Ok(self.monitors.clone())
    }

    fn grabber(&self, monitor_index: usize) -> ScreenspanResult<Box<dyn Grabber>> {
        Err(ScreenspanError::capture_unavailable(
            monitor_index,
            "static backend has no capture",
        ))
    }
}

fn handle_pair(a: Rect, b: Rect) -> (Arc<MonitorHandle>, Arc<MonitorHandle>) {
    let registry = DisplayRegistry::new(Arc::new(StaticBackend::new(vec![a, b])));
    (
        registry.try_handle(0).expect("handle 0"),
        registry.try_handle(1).expect("handle 1"),
    )
}

proptest! {
    /// Translating any point from one monitor's frame to another's and
    /// back is the identity, for arbitrary (including negative) monitor
    /// origins.
    #[test]
    fn translation_is_invertible(
        ax in -4096i32..4096,
        ay in -4096i32..4096,
        bx in -4096i32..4096,
        by in -4096i32..4096,
        px in -10_000i32..10_000,
        py in -10_000i32..10_000,
    ) {
        let (a, b) = handle_pair(
            Rect::new(ax, ay, 1920, 1080),
            Rect::new(bx, by, 1280, 1024),
        );

        let p = Point::new(px, py);
        let in_b = b.to_local(a.to_point(p));
        let back = a.to_local(b.to_point(in_b));
        prop_assert_eq!(back, p);
    }

    /// `to_local` undoes `to_point` on the same handle.
    #[test]
    fn local_global_is_identity(
        mx in -4096i32..4096,
        my in -4096i32..4096,
        px in -10_000i32..10_000,
        py in -10_000i32..10_000,
    ) {
        let (a, _) = handle_pair(
            Rect::new(mx, my, 1920, 1080),
            Rect::new(0, 0, 1280, 1024),
        );

        let p = Point::new(px, py);
        prop_assert_eq!(a.to_local(a.to_point(p)), p);
    }
}
