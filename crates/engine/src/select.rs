//! Interactive region selection.
//!
//! One `user_capture` call owns one [`SelectionSession`]: the overlay
//! collaborator runs on a dedicated thread and completes the session;
//! the calling thread waits in fixed poll intervals up to a configured
//! attempt budget. When the budget runs out the session is cancelled so
//! the overlay can tear itself down; nothing is shared between
//! sessions, so concurrent calls cannot interfere.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use screenspan_common::config::SelectionConfig;
use screenspan_common::error::{ScreenspanError, ScreenspanResult};
use screenspan_platform_core::{Rect, Region};

use crate::capture::CaptureResult;
use crate::handle::MonitorHandle;

/// What the user did with the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A rectangle was drawn, in global coordinates.
    Selected(Rect),
    /// The user aborted without drawing.
    Cancelled,
}

/// Transient state for one interactive capture. Created per call and
/// shared only with that call's overlay thread.
pub struct SelectionSession {
    result: Mutex<Option<Selection>>,
    signal: Condvar,
    cancelled: AtomicBool,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self {
            result: Mutex::new(None),
            signal: Condvar::new(),
            cancelled: AtomicBool::new(false),
        }
    }

    /// Record the user's outcome and wake the waiting caller. The first
    /// completion wins; anything after that (for example an overlay
    /// finishing late into an already timed-out session) is dropped
    /// with the session.
    pub fn complete(&self, selection: Selection) {
        if let Ok(mut slot) = self.result.lock() {
            if slot.is_none() {
                *slot = Some(selection);
            }
        }
        self.signal.notify_all();
    }

    /// Cancellation signal for the overlay: set by the waiter when its
    /// attempt budget runs out. Overlays must observe this and exit
    /// promptly.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.signal.notify_all();
    }

    /// Wait for completion in `poll_interval` slices, at most
    /// `max_attempts` of them. Returns `None` on timeout, after
    /// cancelling the session.
    fn wait(&self, poll_interval: Duration, max_attempts: u32) -> Option<Selection> {
        let mut slot = self.result.lock().unwrap_or_else(|e| e.into_inner());
        for _ in 0..max_attempts {
            if let Some(selection) = slot.take() {
                return Some(selection);
            }
            let (guard, _) = self
                .signal
                .wait_timeout_while(slot, poll_interval, |result| result.is_none())
                .unwrap_or_else(|e| e.into_inner());
            slot = guard;
        }
        if let Some(selection) = slot.take() {
            return Some(selection);
        }
        drop(slot);
        self.cancel();
        None
    }
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything an overlay needs for one selection run.
pub struct OverlayRequest {
    /// Bounds of the monitor to draw on, in global coordinates.
    pub target: Rect,
    /// Prompt shown to the user.
    pub message: String,
    /// The session to complete, and whose cancellation to observe.
    pub session: Arc<SelectionSession>,
}

/// The interactive overlay renderer collaborator.
///
/// Implementations render `message` over `target`, let the user drag a
/// rectangle, and call [`SelectionSession::complete`] with the outcome.
/// They run on a dedicated thread, blocking until done, and must exit
/// promptly once [`SelectionSession::is_cancelled`] turns true.
pub trait SelectionOverlay: Send + Sync {
    fn run(&self, request: OverlayRequest);
}

/// Runs interactive selections against a monitor handle.
pub struct InteractiveSelector {
    overlay: Arc<dyn SelectionOverlay>,
    config: SelectionConfig,
}

impl InteractiveSelector {
    pub fn new(overlay: Arc<dyn SelectionOverlay>, config: SelectionConfig) -> Self {
        Self { overlay, config }
    }

    /// Let the user drag a rectangle on `handle`'s monitor and capture
    /// it. `Ok(None)` means the user cancelled or the wait timed out;
    /// neither is an error.
    pub fn user_capture(
        &self,
        handle: &MonitorHandle,
        message: Option<&str>,
    ) -> ScreenspanResult<Option<CaptureResult>> {
        let message = message.unwrap_or(&self.config.default_prompt).to_string();
        let session = Arc::new(SelectionSession::new());

        tracing::debug!(monitor = handle.id(), message = %message, "Interactive capture started");

        let request = OverlayRequest {
            target: handle.region().rect(),
            message,
            session: Arc::clone(&session),
        };
        let overlay = Arc::clone(&self.overlay);
        let worker = std::thread::Builder::new()
            .name("screenspan-overlay".to_string())
            .spawn(move || overlay.run(request))
            .map_err(|e| ScreenspanError::platform(format!("failed to spawn overlay: {e}")))?;

        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);
        match session.wait(poll_interval, self.config.max_poll_attempts) {
            Some(Selection::Selected(rect)) => {
                let result = handle.capture_rect(rect)?;
                let _ = worker.join();
                Ok(Some(result))
            }
            Some(Selection::Cancelled) => {
                tracing::debug!(monitor = handle.id(), "Selection cancelled by user");
                let _ = worker.join();
                Ok(None)
            }
            None => {
                // The session is cancelled at this point; the overlay
                // tears itself down without the caller blocking on it.
                tracing::warn!(
                    monitor = handle.id(),
                    attempts = self.config.max_poll_attempts,
                    "Interactive capture timed out"
                );
                Ok(None)
            }
        }
    }

    /// [`InteractiveSelector::user_capture`] plus extraction of the
    /// drawn rectangle as a region.
    pub fn select_region(
        &self,
        handle: &MonitorHandle,
        message: Option<&str>,
    ) -> ScreenspanResult<Option<Region>> {
        Ok(self
            .user_capture(handle, message)?
            .map(|capture| capture.region_of_interest()))
    }
}
