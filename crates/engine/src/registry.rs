//! Process-wide monitor table.

use std::sync::{Arc, RwLock};

use screenspan_common::error::{ScreenspanError, ScreenspanResult};
use screenspan_platform_core::{virtual_desktop_bounds, MonitorInfo, Point, Rect};

use crate::backend::DisplayBackend;
use crate::handle::MonitorHandle;

/// One complete, internally consistent snapshot of the monitor table.
/// Replaced wholesale on reset, never patched in place.
struct Generation {
    monitors: Vec<Arc<MonitorHandle>>,
    infos: Vec<MonitorInfo>,
    primary: usize,
}

/// The registry of attached monitors.
///
/// Lazily initialized on first access; `initialize`/`reset` are the
/// only writers, everything else reads an immutable generation
/// snapshot. Handles issued from an earlier generation keep their stale
/// geometry after a reset and must be re-fetched; the registry does
/// not revoke them.
pub struct DisplayRegistry {
    backend: Arc<dyn DisplayBackend>,
    generation: RwLock<Option<Arc<Generation>>>,
}

impl DisplayRegistry {
    pub fn new(backend: Arc<dyn DisplayBackend>) -> Self {
        Self {
            backend,
            generation: RwLock::new(None),
        }
    }

    /// Enumerate monitors and build the handle table. Idempotent: an
    /// already initialized registry is left untouched unless `force` is
    /// set.
    ///
    /// A platform query failure, or a platform reporting no devices,
    /// yields a valid zero-monitor generation rather than an error:
    /// count 0, primary id 0, and no usable handles.
    pub fn initialize(&self, force: bool) {
        self.generation_for(force);
    }

    fn generation_for(&self, force: bool) -> Arc<Generation> {
        if !force {
            let guard = self
                .generation
                .read()
                .unwrap_or_else(|e| e.into_inner());
            if let Some(generation) = guard.as_ref() {
                return Arc::clone(generation);
            }
        }

        let mut guard = self
            .generation
            .write()
            .unwrap_or_else(|e| e.into_inner());
        // Another thread may have initialized while we waited for the
        // write lock.
        if !force {
            if let Some(generation) = guard.as_ref() {
                return Arc::clone(generation);
            }
        }

        let infos = match self.backend.monitors() {
            Ok(infos) => infos,
            Err(e) => {
                tracing::error!(error = %e, "Monitor enumeration failed; continuing with zero monitors");
                Vec::new()
            }
        };

        let monitors: Vec<Arc<MonitorHandle>> = infos
            .iter()
            .enumerate()
            .map(|(id, info)| Arc::new(MonitorHandle::new(id, info, Arc::clone(&self.backend))))
            .collect();

        // The monitor whose top-left corner sits at the global origin
        // is primary; enumeration order breaks ties, id 0 is the
        // fallback.
        let primary = infos.iter().position(MonitorInfo::at_origin).unwrap_or(0);

        tracing::info!(
            count = monitors.len(),
            primary,
            "Monitor table initialized"
        );

        let generation = Arc::new(Generation {
            monitors,
            infos,
            primary,
        });
        *guard = Some(Arc::clone(&generation));
        generation
    }

    fn snapshot(&self) -> Arc<Generation> {
        self.generation_for(false)
    }

    /// Number of attached monitors.
    pub fn screen_count(&self) -> usize {
        self.snapshot().monitors.len()
    }

    /// Id of the primary monitor: the one at global origin (0,0), or 0
    /// when none sits there (including the zero-monitor case).
    pub fn primary_id(&self) -> usize {
        self.snapshot().primary
    }

    /// The primary monitor's handle. `None` only when no monitors are
    /// attached.
    pub fn primary_handle(&self) -> Option<Arc<MonitorHandle>> {
        let generation = self.snapshot();
        generation.monitors.get(generation.primary).cloned()
    }

    /// Lenient accessor: an out-of-range id is clamped to the primary
    /// monitor. Callers may rely on this policy. `None` only when no
    /// monitors are attached.
    pub fn handle(&self, id: usize) -> Option<Arc<MonitorHandle>> {
        let generation = self.snapshot();
        generation
            .monitors
            .get(id)
            .or_else(|| generation.monitors.get(generation.primary))
            .cloned()
    }

    /// Strict accessor: an out-of-range id is an error.
    pub fn try_handle(&self, id: usize) -> ScreenspanResult<Arc<MonitorHandle>> {
        let generation = self.snapshot();
        generation
            .monitors
            .get(id)
            .cloned()
            .ok_or(ScreenspanError::InvalidMonitorId {
                id,
                count: generation.monitors.len(),
            })
    }

    /// Strict bounds query: live platform bounds for a validated id,
    /// falling back to the generation's recorded geometry when the
    /// platform cannot answer.
    pub fn try_bounds(&self, id: usize) -> ScreenspanResult<Rect> {
        let handle = self.try_handle(id)?;
        Ok(handle.bounds())
    }

    /// Id of the monitor containing a global point, if any.
    pub fn monitor_at(&self, p: Point) -> Option<usize> {
        self.snapshot()
            .infos
            .iter()
            .position(|info| info.bounds.contains(p))
    }

    /// Union of all monitor bounds in this generation.
    pub fn virtual_bounds(&self) -> Rect {
        virtual_desktop_bounds(&self.snapshot().infos)
    }

    /// The current generation's monitor descriptors.
    pub fn monitor_infos(&self) -> Vec<MonitorInfo> {
        self.snapshot().infos.clone()
    }

    /// Re-enumerate the monitor setup, replacing the generation
    /// wholesale.
    ///
    /// Experimental: handles issued before the reset keep their old
    /// geometry and capture bindings. Re-fetch every handle afterwards.
    pub fn reset(&self) {
        tracing::warn!("Monitor re-enumeration requested; previously issued handles are stale");
        self.generation_for(true);
        self.log_monitors();
    }

    /// Dump the current monitor configuration at info level.
    pub fn log_monitors(&self) {
        let generation = self.snapshot();
        tracing::info!(
            count = generation.monitors.len(),
            primary = generation.primary,
            "Monitor configuration"
        );
        for handle in &generation.monitors {
            tracing::info!(monitor = %handle, primary = (handle.id() == generation.primary));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockBackend;

    fn two_monitor_registry() -> DisplayRegistry {
        // A at origin, B to its left with a negative x offset.
        DisplayRegistry::new(Arc::new(MockBackend::new(vec![
            Rect::new(0, 0, 1920, 1080),
            Rect::new(-1280, 0, 1280, 1024),
        ])))
    }

    #[test]
    fn ids_follow_enumeration_order_and_primary_is_origin() {
        let registry = DisplayRegistry::new(Arc::new(MockBackend::new(vec![
            Rect::new(1920, 0, 1280, 1024),
            Rect::new(0, 0, 1920, 1080),
        ])));

        assert_eq!(registry.screen_count(), 2);
        assert_eq!(registry.primary_id(), 1);
        for id in 0..registry.screen_count() {
            assert_eq!(registry.try_handle(id).unwrap().id(), id);
        }
    }

    #[test]
    fn primary_defaults_to_zero_without_origin_monitor() {
        let registry = DisplayRegistry::new(Arc::new(MockBackend::new(vec![
            Rect::new(100, 100, 800, 600),
            Rect::new(900, 100, 800, 600),
        ])));
        assert_eq!(registry.primary_id(), 0);
    }

    #[test]
    fn negative_offset_monitor_keeps_origin_monitor_primary() {
        let registry = two_monitor_registry();
        assert_eq!(registry.screen_count(), 2);
        assert_eq!(registry.primary_id(), 0);
        assert_eq!(
            registry.try_bounds(1).unwrap(),
            Rect::new(-1280, 0, 1280, 1024)
        );
    }

    #[test]
    fn out_of_range_id_clamps_to_primary() {
        let registry = two_monitor_registry();
        let primary = registry.primary_handle().unwrap();
        let clamped = registry.handle(99).unwrap();
        assert!(Arc::ptr_eq(&primary, &clamped));
    }

    #[test]
    fn strict_accessors_reject_out_of_range_ids() {
        let registry = two_monitor_registry();
        assert!(matches!(
            registry.try_handle(2),
            Err(ScreenspanError::InvalidMonitorId { id: 2, count: 2 })
        ));
        assert!(registry.try_bounds(1).is_ok());
        assert!(registry.try_bounds(5).is_err());
    }

    #[test]
    fn initialization_is_idempotent() {
        let registry = two_monitor_registry();
        let first = registry.handle(0).unwrap();
        registry.initialize(false);
        let second = registry.handle(0).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn reset_builds_a_new_generation() {
        let registry = two_monitor_registry();
        let old = registry.handle(0).unwrap();
        registry.reset();
        let new = registry.handle(0).unwrap();
        assert!(!Arc::ptr_eq(&old, &new));
    }

    #[test]
    fn reset_onto_zero_monitors_is_safe() {
        let backend = Arc::new(MockBackend::new(vec![Rect::new(0, 0, 1920, 1080)]));
        let registry = DisplayRegistry::new(Arc::clone(&backend));
        assert_eq!(registry.screen_count(), 1);

        backend.set_monitors(vec![]);
        registry.reset();

        assert_eq!(registry.screen_count(), 0);
        assert_eq!(registry.primary_id(), 0);
        assert!(registry.primary_handle().is_none());
        assert!(registry.handle(3).is_none());
        assert!(registry.try_handle(0).is_err());
        assert_eq!(registry.virtual_bounds(), Rect::ZERO);
    }

    #[test]
    fn enumeration_failure_degrades_to_zero_monitors() {
        let backend = Arc::new(MockBackend::new(vec![]));
        backend.fail_enumeration(true);
        let registry = DisplayRegistry::new(backend);
        assert_eq!(registry.screen_count(), 0);
        assert_eq!(registry.primary_id(), 0);
    }

    #[test]
    fn monitor_at_resolves_negative_coordinates() {
        let registry = two_monitor_registry();
        assert_eq!(registry.monitor_at(Point::new(10, 10)), Some(0));
        assert_eq!(registry.monitor_at(Point::new(-1, 10)), Some(1));
        assert_eq!(registry.monitor_at(Point::new(-2000, 10)), None);
    }

    #[test]
    fn virtual_bounds_span_all_monitors() {
        let registry = two_monitor_registry();
        assert_eq!(registry.virtual_bounds(), Rect::new(-1280, 0, 3200, 1080));
    }
}
