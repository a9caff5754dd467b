//! Page-wide scroll position notifications

use std::sync::{Arc, Mutex, PoisonError};

use log::trace;

use super::subscription::{Registry, Subscription};

/// Listener invoked with the new vertical scroll offset
pub type ScrollHandler = Arc<dyn Fn(f64) + Send + Sync>;

/// Source of scroll-position notifications.
pub trait ScrollNotifier: Send + Sync {
    /// Offset at the time of the call
    fn current_offset(&self) -> f64;

    /// Register a handler invoked on every scroll change
    fn subscribe(&self, handler: ScrollHandler) -> Subscription;

    /// Number of live subscriptions
    fn listener_count(&self) -> usize;
}

/// In-memory window scroll position.
///
/// Clones share the same position and listeners.
#[derive(Clone)]
pub struct WindowScroll {
    offset: Arc<Mutex<f64>>,
    listeners: Registry<ScrollHandler>,
}

impl WindowScroll {
    pub fn new() -> Self {
        Self {
            offset: Arc::new(Mutex::new(0.0)),
            listeners: Registry::new("scroll"),
        }
    }

    /// Move to `offset` and notify every listener in subscription order.
    pub fn scroll_to(&self, offset: f64) {
        *self.offset.lock().unwrap_or_else(PoisonError::into_inner) = offset;
        for (id, handler) in self.listeners.snapshot() {
            trace!("scroll: notify listener {} offset={}", id, offset);
            handler(offset);
        }
    }
}

impl Default for WindowScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollNotifier for WindowScroll {
    fn current_offset(&self) -> f64 {
        *self.offset.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribe(&self, handler: ScrollHandler) -> Subscription {
        self.listeners.insert(handler).1
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
