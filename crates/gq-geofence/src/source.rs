//! The device-location collaborator.
//!
//! A [`LocationSource`] is push based: the watcher registers a callback and
//! the source invokes it whenever it has a new fix or an error, from
//! whatever context it likes.  The watcher never polls.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use gq_core::Coordinate;

use crate::LocationError;

/// One reading from the location source.
pub type LocationUpdate = Result<Coordinate, LocationError>;

/// Callback registered with [`LocationSource::watch`].
pub type LocationCallback = Arc<dyn Fn(LocationUpdate) + Send + Sync>;

/// Handle for an active subscription, used to cancel it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WatchId(pub u64);

impl std::fmt::Display for WatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WatchId({})", self.0)
    }
}

/// Pluggable device-location provider (platform GPS, browser bridge, replay
/// file, test double).
pub trait LocationSource {
    /// Start delivering updates to `callback` until [`clear_watch`] is called
    /// with the returned id.
    ///
    /// [`clear_watch`]: LocationSource::clear_watch
    fn watch(&mut self, callback: LocationCallback) -> WatchId;

    /// Stop a subscription.  Unknown ids are ignored.
    ///
    /// Sources may still deliver an update that was already in flight; the
    /// watcher discards those.
    fn clear_watch(&mut self, id: WatchId);

    /// A one-shot reading, for "nearest to me" lookups.
    fn current_position(&self) -> LocationUpdate;
}

// ── ManualLocationSource ──────────────────────────────────────────────────────

#[derive(Default)]
struct ManualInner {
    next_id: u64,
    watches: BTreeMap<WatchId, LocationCallback>,
    last:    Option<LocationUpdate>,
}

/// An in-process source whose updates are pushed by hand with [`emit`].
///
/// Cloning yields another handle to the same source, so one handle can be
/// given to a [`GeofenceWatcher`][crate::GeofenceWatcher] while another keeps
/// driving it.  Used for tests and scripted walks.
///
/// [`emit`]: ManualLocationSource::emit
#[derive(Clone, Default)]
pub struct ManualLocationSource {
    inner: Arc<Mutex<ManualInner>>,
}

impl ManualLocationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `update` to every active watch, in subscription order.
    ///
    /// Callbacks run after the source's own lock is released.
    pub fn emit(&self, update: LocationUpdate) {
        let callbacks: Vec<LocationCallback> = {
            let mut inner = self.inner.lock();
            inner.last = Some(update.clone());
            inner.watches.values().cloned().collect()
        };
        for cb in callbacks {
            cb(update.clone());
        }
    }

    /// Shorthand for `emit(Ok(c))`.
    pub fn move_to(&self, c: Coordinate) {
        self.emit(Ok(c));
    }

    /// The callback registered under `id`, if still active.  Holding on to it
    /// lets a test deliver an update after the watch was cleared.
    pub fn callback(&self, id: WatchId) -> Option<LocationCallback> {
        self.inner.lock().watches.get(&id).cloned()
    }

    /// Ids of all active watches.
    pub fn active_watches(&self) -> Vec<WatchId> {
        self.inner.lock().watches.keys().copied().collect()
    }
}

impl LocationSource for ManualLocationSource {
    fn watch(&mut self, callback: LocationCallback) -> WatchId {
        let mut inner = self.inner.lock();
        let id = WatchId(inner.next_id);
        inner.next_id += 1;
        inner.watches.insert(id, callback);
        id
    }

    fn clear_watch(&mut self, id: WatchId) {
        self.inner.lock().watches.remove(&id);
    }

    fn current_position(&self) -> LocationUpdate {
        self.inner
            .lock()
            .last
            .clone()
            .unwrap_or(Err(LocationError::PositionUnavailable))
    }
}
