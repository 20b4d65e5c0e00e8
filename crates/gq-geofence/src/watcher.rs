//! First-entry geofence watcher.
//!
//! # State machine
//!
//! ```text
//!            start_watching              stop_watching / drop
//!   Idle ───────────────────▶ Watching ───────────────────────▶ Idle
//!                              │   ▲
//!                              └───┘ start_watching (replaces the session)
//! ```
//!
//! Each session gets a fresh generation number, captured by the callback it
//! registers with the source.  An update carrying any other generation, or
//! arriving while Idle, is dropped.  That covers sources that still deliver
//! an in-flight fix after `clear_watch`.
//!
//! Within a session every item fires `on_enter` at most once: the first
//! update that lands strictly inside `radius_km` of it.  Leaving and
//! re-entering the zone does not fire again until a new session starts.

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use gq_core::{Coordinate, ItemId, Located};

use crate::{GeofenceError, GeofenceResult, LocationCallback, LocationSource, LocationUpdate, WatchId};

type EnterFn<T> = Box<dyn FnMut(&T) + Send>;

/// One watching session's zone set and notified ids.
struct Session<T> {
    items:     Vec<T>,
    radius_km: f64,
    notified:  HashSet<ItemId>,
    on_enter:  EnterFn<T>,
}

impl<T: Located> Session<T> {
    /// Fire `on_enter` for every not-yet-notified item within range of
    /// `here`.  Returns how many fired.
    fn check(&mut self, here: Coordinate) -> usize {
        let mut fired = 0;
        for item in &self.items {
            if self.notified.contains(item.id()) {
                continue;
            }
            let Some(at) = item.valid_location() else { continue };
            let d = here.distance_km(at);
            if d < self.radius_km {
                tracing::info!(id = %item.id(), distance_km = d, "entered geofence");
                self.notified.insert(ItemId::from(item.id()));
                (self.on_enter)(item);
                fired += 1;
            }
        }
        fired
    }
}

struct Shared<T> {
    generation: u64,
    session:    Option<Session<T>>,
}

/// Watches a [`LocationSource`] and reports the first entry into each item's
/// zone.
///
/// The watcher owns its source subscription; dropping it stops watching.
/// `on_enter` runs while the session is locked and must not call back into
/// the same source.
pub struct GeofenceWatcher<S: LocationSource, T> {
    source: S,
    shared: Arc<Mutex<Shared<T>>>,
    watch:  Option<WatchId>,
}

impl<S: LocationSource, T> GeofenceWatcher<S, T> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            shared: Arc::new(Mutex::new(Shared { generation: 0, session: None })),
            watch:  None,
        }
    }

    /// Cancel the subscription and forget the notified set.  No-op when Idle.
    pub fn stop_watching(&mut self) {
        if let Some(id) = self.watch.take() {
            self.source.clear_watch(id);
        }
        let mut shared = self.shared.lock();
        if shared.session.take().is_some() {
            tracing::debug!(generation = shared.generation, "geofence watch stopped");
        }
    }

    pub fn is_watching(&self) -> bool {
        self.shared.lock().session.is_some()
    }

    /// Generation of the current (or most recent) session.  Starts at 0
    /// before the first `start_watching`.
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// Ids already notified in the current session, sorted.  Empty when Idle.
    pub fn notified(&self) -> Vec<ItemId> {
        let shared = self.shared.lock();
        let mut ids: Vec<ItemId> = shared
            .session
            .as_ref()
            .map(|s| s.notified.iter().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }
}

impl<S, T> GeofenceWatcher<S, T>
where
    S: LocationSource,
    T: Located + Send + 'static,
{
    /// Begin a new session over `items`.
    ///
    /// Any running session is stopped first, so calling this twice never
    /// leaves two subscriptions behind.  Items without a valid location are
    /// kept but can never fire.
    ///
    /// # Errors
    ///
    /// [`GeofenceError::InvalidRadius`] if `radius_km` is not a positive,
    /// finite number.  The watcher is left Idle in that case.
    pub fn start_watching<F>(&mut self, items: Vec<T>, radius_km: f64, on_enter: F) -> GeofenceResult<()>
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.stop_watching();

        if !(radius_km.is_finite() && radius_km > 0.0) {
            return Err(GeofenceError::InvalidRadius(radius_km));
        }

        let generation = {
            let mut shared = self.shared.lock();
            shared.generation += 1;
            shared.session = Some(Session {
                items,
                radius_km,
                notified: HashSet::new(),
                on_enter: Box::new(on_enter),
            });
            shared.generation
        };

        let weak: Weak<Mutex<Shared<T>>> = Arc::downgrade(&self.shared);
        let callback: LocationCallback = Arc::new(move |update: LocationUpdate| {
            if let Some(shared) = weak.upgrade() {
                deliver(&shared, generation, update);
            }
        });

        let id = self.source.watch(callback);
        self.watch = Some(id);
        tracing::debug!(generation, watch = %id, radius_km, "geofence watch started");
        Ok(())
    }
}

impl<S: LocationSource, T> Drop for GeofenceWatcher<S, T> {
    fn drop(&mut self) {
        self.stop_watching();
    }
}

/// Apply one update from the session tagged `generation`.
fn deliver<T: Located>(shared: &Mutex<Shared<T>>, generation: u64, update: LocationUpdate) {
    let mut shared = shared.lock();
    if shared.generation != generation {
        tracing::trace!(generation, current = shared.generation, "dropping update from superseded session");
        return;
    }
    let Some(session) = shared.session.as_mut() else {
        tracing::trace!(generation, "dropping update delivered after stop");
        return;
    };

    match update {
        Ok(here) if here.is_valid() => {
            let fired = session.check(here);
            tracing::trace!(%here, fired, "location update applied");
        }
        Ok(here) => {
            tracing::warn!(%here, "ignoring invalid location fix");
        }
        Err(e) => {
            tracing::warn!(error = %e, "location update failed; still watching");
        }
    }
}
