//! Screenspan Engine
//!
//! Manages the set of physical monitors behind one global cartesian
//! coordinate space and provides capture services against it: full
//! monitor, explicit rectangle, and interactive user-drawn selection.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                DisplayRegistry                    │
//! │   generation snapshot: [MonitorHandle; N]         │
//! │        │ id 0..N-1, primary by (0,0) rule         │
//! │        ▼                                          │
//! │   MonitorHandle ──capture──► Grabber (backend)    │
//! │        │                                          │
//! │        └─user_capture─► InteractiveSelector       │
//! │                          overlay thread + session │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The registry is the only writer of the monitor table; readers work
//! on immutable generation snapshots. Handles are issued once per id
//! per generation and shared by reference.

pub mod backend;
pub mod capture;
pub mod handle;
pub mod registry;
pub mod select;

pub use backend::{default_backend, DesktopBackend, DisplayBackend, Grabber};
pub use capture::CaptureResult;
pub use handle::MonitorHandle;
pub use registry::DisplayRegistry;
pub use select::{
    InteractiveSelector, OverlayRequest, Selection, SelectionOverlay, SelectionSession,
};

#[cfg(test)]
pub(crate) mod test_support;
