//! Screenspan platform core contracts.
//!
//! This crate contains cross-platform display data structures and the
//! global-coordinate geometry used by the engine and CLI crates without
//! coupling to a concrete OS backend.

pub mod geometry;

pub use geometry::{Point, Rect, Region};

use serde::{Deserialize, Serialize};

/// Information about a connected monitor as reported by the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorInfo {
    /// Monitor name/identifier.
    pub name: String,
    /// Bounds in the global coordinate space (origin may be negative).
    pub bounds: Rect,
    /// Scale factor (for example 1.0, 1.25, 2.0). Carried as data only.
    pub scale_factor: f64,
    /// Whether the platform reports this monitor as primary.
    pub is_primary: bool,
}

impl MonitorInfo {
    /// `true` when the monitor's top-left corner sits at the global
    /// origin. The registry prefers this over the platform's own
    /// primary flag so primary selection stays deterministic.
    pub fn at_origin(&self) -> bool {
        self.bounds.x == 0 && self.bounds.y == 0
    }
}

/// Compute virtual desktop bounds that include all connected monitors.
///
/// Returns `Rect::ZERO` for an empty monitor list; a zero-monitor
/// configuration is valid (if unusable) and must not invent geometry.
pub fn virtual_desktop_bounds(monitors: &[MonitorInfo]) -> Rect {
    monitors
        .iter()
        .fold(Rect::ZERO, |acc, m| acc.union(&m.bounds))
}
