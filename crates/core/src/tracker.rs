//! Scroll-position → active-section resolution.
//!
//! A [`SectionTracker`] owns the single writable [`ActiveCell`] and an
//! ordered [`SectionRegistry`]. On every `recompute` it reads fresh
//! geometry, resolves the viewport's probe point against the section
//! intervals, and writes the cell at most once. Consumers read the cell or
//! subscribe to change notifications; nothing else writes it.

use std::cell::{Cell, RefCell};

use termfolio_protocol::Viewport;

use crate::model::{SectionId, SectionMetrics};

/// Provider of live section geometry, consulted on every resolution pass.
///
/// Returning `None` means the section is not present in the laid-out
/// document right now; the tracker skips it rather than failing.
pub trait SectionGeometry {
    fn metrics(&self, id: SectionId) -> Option<SectionMetrics>;
}

/// Outcome of a single resolution pass, as an explicit enumerated result
/// instead of an absent-key fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The probe point fell inside this section's interval.
    Matched(SectionId),
    /// No interval contains the probe point. The active value is retained.
    NoMatch,
}

/// Fixed, ordered list of section ids, populated at composition time.
///
/// Iteration order is document order; when intervals overlap, the first
/// section in this order wins.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    order: Vec<SectionId>,
}

impl SectionRegistry {
    /// Registry over the full page in document order.
    pub fn document_order() -> Self {
        Self {
            order: SectionId::ALL.to_vec(),
        }
    }

    /// Registry over an explicit subset/order (used by tests and partial
    /// compositions).
    pub fn with_order(order: Vec<SectionId>) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &[SectionId] {
        &self.order
    }

    /// Resolve a probe point against current geometry: first section in
    /// registry order whose interval contains the point. Sections without
    /// geometry are skipped.
    pub fn resolve(&self, geometry: &impl SectionGeometry, probe: f64) -> Resolution {
        for &id in &self.order {
            let Some(metrics) = geometry.metrics(id) else {
                continue;
            };
            if metrics.contains(probe) {
                return Resolution::Matched(id);
            }
        }
        Resolution::NoMatch
    }
}

/// Handle returned by [`ActiveCell::subscribe`]; pass it back to
/// [`ActiveCell::unsubscribe`] on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(SectionId)>;

/// Single-writer, many-reader cell holding the current section id.
///
/// Only the owning tracker writes it. Writes that don't change the value
/// are swallowed, so subscribers observe exactly one notification per
/// actual transition.
pub struct ActiveCell {
    current: Cell<SectionId>,
    subscribers: RefCell<Vec<(u64, Subscriber)>>,
    next_id: Cell<u64>,
}

impl ActiveCell {
    pub fn new(initial: SectionId) -> Self {
        Self {
            current: Cell::new(initial),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn get(&self) -> SectionId {
        self.current.get()
    }

    /// Register a change listener. The callback fires on transitions only,
    /// not for the initial value.
    pub fn subscribe(&self, callback: impl FnMut(SectionId) + 'static) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Box::new(callback)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(id, _)| *id != subscription.0);
    }

    /// Write the cell; notifies subscribers only when the value changes.
    fn set(&self, id: SectionId) {
        if self.current.get() == id {
            return;
        }
        self.current.set(id);
        tracing::debug!(section = id.as_str(), "active section changed");
        for (_, callback) in self.subscribers.borrow_mut().iter_mut() {
            callback(id);
        }
    }
}

/// Keeps the active-section cell in sync with the scroll position.
pub struct SectionTracker {
    registry: SectionRegistry,
    active: ActiveCell,
}

impl SectionTracker {
    /// The cell starts out holding the registry's first section; there is
    /// no "none" state, before or after the first measurement.
    pub fn new(registry: SectionRegistry) -> Self {
        let initial = registry.order().first().copied().unwrap_or(SectionId::Hero);
        Self {
            registry,
            active: ActiveCell::new(initial),
        }
    }

    pub fn active(&self) -> SectionId {
        self.active.get()
    }

    pub fn subscribe(&self, callback: impl FnMut(SectionId) + 'static) -> SubscriptionId {
        self.active.subscribe(callback)
    }

    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        self.active.unsubscribe(subscription)
    }

    /// One synchronization pass: a pure read of geometry followed by at
    /// most one cell write. Safe to call at any cadence; callers typically
    /// batch to one call per drawn frame.
    pub fn recompute(&self, geometry: &impl SectionGeometry, viewport: &Viewport) -> Resolution {
        let resolution = self.registry.resolve(geometry, viewport.probe_point());
        if let Resolution::Matched(id) = resolution {
            self.active.set(id);
        }
        resolution
    }
}
