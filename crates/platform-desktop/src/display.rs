//! Display/monitor detection.

use screenspan_common::error::{ScreenspanError, ScreenspanResult};
use screenspan_platform_core::{MonitorInfo, Rect};

/// Query the platform for connected monitors, in the platform's stable
/// enumeration order.
///
/// Field-level failures on a single monitor (xcap reports each property
/// as fallible) fall back to neutral values rather than dropping the
/// monitor, so enumeration order and count stay consistent.
pub fn detect_monitors() -> ScreenspanResult<Vec<MonitorInfo>> {
    tracing::debug!("Detecting monitors");

    let monitors =
        xcap::Monitor::all().map_err(|e| ScreenspanError::platform(e.to_string()))?;

    Ok(monitors
        .iter()
        .enumerate()
        .map(|(i, m)| monitor_to_info(m, i))
        .collect())
}

fn monitor_to_info(monitor: &xcap::Monitor, index: usize) -> MonitorInfo {
    let name = monitor
        .name()
        .unwrap_or_else(|_| format!("Monitor {index}"));
    let x = monitor.x().unwrap_or(0);
    let y = monitor.y().unwrap_or(0);
    let width = monitor.width().unwrap_or(0) as i32;
    let height = monitor.height().unwrap_or(0) as i32;

    MonitorInfo {
        name,
        bounds: Rect::new(x, y, width, height),
        scale_factor: monitor.scale_factor().unwrap_or(1.0) as f64,
        is_primary: monitor.is_primary().unwrap_or(index == 0),
    }
}

/// Whether the pixel-grab primitive can be constructed at all on this
/// system (monitor enumeration succeeding is the cheapest proxy xcap
/// offers).
pub fn is_capture_available() -> bool {
    xcap::Monitor::all().is_ok()
}

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    if cfg!(target_os = "windows") {
        DisplayServer::Windows
    } else if cfg!(target_os = "macos") {
        DisplayServer::MacOS
    } else if std::env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServer::Wayland
    } else if std::env::var("DISPLAY").is_ok() {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}

/// Display server type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    Windows,
    MacOS,
    Unknown,
}
