//! Owned listener registrations.
//!
//! Every notifier stores its listeners in a [`Registry`]. Registering hands
//! back a [`Subscription`] whose drop removes the listener again, so a
//! listener can never outlive the component that owns the handle.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use log::debug;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Handle to a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    release: Option<Release>,
}

impl Subscription {
    fn new(release: Release) -> Self {
        Self { release: Some(release) }
    }

    /// Explicitly release the listener.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    /// Whether this handle still owns a registration.
    ///
    /// A handle stays active until it is released, even if the notifier
    /// already disconnected the listener on its own.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

struct Slots<T> {
    next_id: u64,
    items: BTreeMap<u64, T>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ordered set of listeners keyed by registration order.
pub(crate) struct Registry<T> {
    name: &'static str,
    inner: Arc<Mutex<Slots<T>>>,
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self { name: self.name, inner: self.inner.clone() }
    }
}

impl<T: Clone + Send + 'static> Registry<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Arc::new(Mutex::new(Slots { next_id: 0, items: BTreeMap::new() })),
        }
    }

    /// Insert a listener and return its id together with the owning handle.
    pub(crate) fn insert(&self, item: T) -> (u64, Subscription) {
        let id = {
            let mut slots = lock(&self.inner);
            let id = slots.next_id;
            slots.next_id += 1;
            slots.items.insert(id, item);
            id
        };

        let weak: Weak<Mutex<Slots<T>>> = Arc::downgrade(&self.inner);
        let name = self.name;
        let sub = Subscription::new(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                if lock(&inner).items.remove(&id).is_some() {
                    debug!("{}: released listener {}", name, id);
                }
            }
        }));
        (id, sub)
    }

    /// Remove a listener by id without going through its handle.
    pub(crate) fn remove(&self, id: u64) {
        if lock(&self.inner).items.remove(&id).is_some() {
            debug!("{}: disconnected listener {}", self.name, id);
        }
    }

    /// Copy of the current listeners in registration order.
    ///
    /// Callers invoke listeners from the copy so no lock is held while user
    /// code runs.
    pub(crate) fn snapshot(&self) -> Vec<(u64, T)> {
        lock(&self.inner).items.iter().map(|(id, item)| (*id, item.clone())).collect()
    }

    pub(crate) fn len(&self) -> usize {
        lock(&self.inner).items.len()
    }
}
