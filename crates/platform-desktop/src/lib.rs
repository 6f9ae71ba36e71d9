//! Screenspan desktop platform layer.
//!
//! Thin wrappers over the OS display query and the single-shot
//! pixel-grab primitive (via `xcap`). Everything above this crate works
//! in terms of `MonitorInfo` and global-coordinate rectangles; nothing
//! above it touches the OS directly.

pub mod display;
pub mod grab;

pub use display::{detect_display_server, detect_monitors, is_capture_available, DisplayServer};
pub use grab::grab_monitor_rect;
