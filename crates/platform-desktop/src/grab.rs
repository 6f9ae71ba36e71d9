//! Single-shot pixel grab against one monitor.

use image::RgbaImage;
use screenspan_common::error::{ScreenspanError, ScreenspanResult};
use screenspan_platform_core::Rect;

/// Grab the pixels of `rect` (global coordinates) from the monitor at
/// `monitor_index` in enumeration order.
///
/// One attempt, no retries. The rectangle must lie fully inside the
/// monitor's bounds; the crop is computed relative to the monitor's
/// origin. Callers validate rectangle size before reaching this point.
pub fn grab_monitor_rect(monitor_index: usize, rect: Rect) -> ScreenspanResult<RgbaImage> {
    let monitors =
        xcap::Monitor::all().map_err(|e| ScreenspanError::platform(e.to_string()))?;

    let monitor = monitors.get(monitor_index).ok_or_else(|| {
        ScreenspanError::platform(format!(
            "monitor {monitor_index} disappeared ({} available)",
            monitors.len()
        ))
    })?;

    let origin_x = monitor.x().unwrap_or(0);
    let origin_y = monitor.y().unwrap_or(0);

    let full = monitor
        .capture_image()
        .map_err(|e| ScreenspanError::platform(e.to_string()))?;

    let local_x = rect.x - origin_x;
    let local_y = rect.y - origin_y;
    if local_x < 0
        || local_y < 0
        || local_x + rect.w > full.width() as i32
        || local_y + rect.h > full.height() as i32
    {
        return Err(ScreenspanError::platform(format!(
            "capture rect {rect:?} extends outside monitor {monitor_index} ({}x{})",
            full.width(),
            full.height()
        )));
    }

    tracing::debug!(monitor = monitor_index, ?rect, "Pixel grab");

    let cropped = image::imageops::crop_imm(
        &full,
        local_x as u32,
        local_y as u32,
        rect.w as u32,
        rect.h as u32,
    )
    .to_image();
    Ok(cropped)
}
