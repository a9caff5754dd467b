//! Page-wide scroll offset tracking and hero parallax.

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::platform::{ScrollNotifier, Subscription};

/// Fraction of the scroll offset applied to the hero block
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.3;

/// Displayed position of a block shifted by `factor` times the scroll offset.
pub fn parallax_shift(base: f64, scroll_offset: f64, factor: f64) -> f64 {
    base + factor * scroll_offset
}

/// Latest scroll offset, kept current by a scroll subscription.
///
/// Every notification overwrites the value as delivered; there is no
/// smoothing, debouncing or clamping.
pub struct ScrollTracker {
    offset: Arc<Mutex<f64>>,
    parallax_factor: f64,
    subscription: Option<Subscription>,
}

impl ScrollTracker {
    /// Subscribe to `notifier`, starting from its current offset.
    pub fn mount(notifier: &dyn ScrollNotifier, parallax_factor: f64) -> Self {
        let offset = Arc::new(Mutex::new(notifier.current_offset()));
        let sink = offset.clone();
        let subscription = notifier.subscribe(Arc::new(move |y: f64| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = y;
        }));
        debug!("scroll tracker: mounted (factor {})", parallax_factor);
        Self {
            offset,
            parallax_factor,
            subscription: Some(subscription),
        }
    }

    pub fn offset(&self) -> f64 {
        *self.offset.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn parallax_factor(&self) -> f64 {
        self.parallax_factor
    }

    /// Hero position for a base position at the current offset.
    pub fn hero_offset(&self, base: f64) -> f64 {
        parallax_shift(base, self.offset(), self.parallax_factor)
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Release the scroll subscription. The last offset stays readable.
    pub fn unmount(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.unsubscribe();
            debug!("scroll tracker: unmounted");
        }
    }
}
