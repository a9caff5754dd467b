//! Viewport intersection notifications computed from document geometry

use std::sync::{Arc, Mutex, PoisonError};

use log::trace;

use super::subscription::{Registry, Subscription};
use crate::rendering::layout::Rect;

/// What an intersection handler wants after seeing an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Keep delivering entries
    Continue,
    /// Stop observing this target
    Disconnect,
}

/// A single intersection change for an observed target
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: Rect,
    /// Fraction of the target's height inside the viewport, in `[0, 1]`
    pub intersection_ratio: f64,
    /// Whether the ratio is at or above the observer's threshold
    pub is_intersecting: bool,
}

pub type IntersectionHandler = Arc<dyn Fn(&IntersectionEntry) -> Observation + Send + Sync>;

/// Source of viewport intersection notifications.
pub trait IntersectionNotifier: Send + Sync {
    /// Observe `target`. The handler receives one entry immediately and then
    /// one entry each time the target crosses `threshold`.
    fn observe(&self, target: Rect, threshold: f64, handler: IntersectionHandler) -> Subscription;

    /// Number of targets still observed
    fn observer_count(&self) -> usize;
}

/// Fraction of `target` visible in the window `[top, top + height)`.
pub fn intersection_ratio(target: &Rect, top: f64, height: f64) -> f64 {
    let start = target.y.max(top);
    let end = target.bottom().min(top + height);
    let overlap = (end - start).max(0.0);
    if target.height <= 0.0 {
        // Zero-height targets count as fully visible while inside the window
        return if target.y >= top && target.y < top + height { 1.0 } else { 0.0 };
    }
    (overlap / target.height).clamp(0.0, 1.0)
}

#[derive(Clone)]
struct Observer {
    target: Rect,
    threshold: f64,
    last: Arc<Mutex<Option<bool>>>,
    handler: IntersectionHandler,
}

impl Observer {
    fn entry(&self, top: f64, height: f64) -> IntersectionEntry {
        let ratio = intersection_ratio(&self.target, top, height);
        IntersectionEntry {
            target: self.target,
            intersection_ratio: ratio,
            is_intersecting: ratio > 0.0 && ratio >= self.threshold,
        }
    }

    /// Deliver `entry` if the intersecting flag changed since the last one.
    fn deliver(&self, entry: &IntersectionEntry) -> Option<Observation> {
        {
            let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
            if *last == Some(entry.is_intersecting) {
                return None;
            }
            *last = Some(entry.is_intersecting);
        }
        Some((self.handler)(entry))
    }
}

/// In-memory viewport that derives intersections from scroll position.
///
/// Clones share the same scroll position and observers.
#[derive(Clone)]
pub struct ViewportIntersections {
    viewport_height: f64,
    scroll_top: Arc<Mutex<f64>>,
    observers: Registry<Observer>,
}

impl ViewportIntersections {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_top: Arc::new(Mutex::new(0.0)),
            observers: Registry::new("intersection"),
        }
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Recompute every observed target for a new scroll position.
    pub fn update(&self, scroll_top: f64) {
        *self.scroll_top.lock().unwrap_or_else(PoisonError::into_inner) = scroll_top;
        for (id, observer) in self.observers.snapshot() {
            let entry = observer.entry(scroll_top, self.viewport_height);
            self.dispatch(id, &observer, &entry);
        }
    }

    fn dispatch(&self, id: u64, observer: &Observer, entry: &IntersectionEntry) {
        if let Some(outcome) = observer.deliver(entry) {
            trace!(
                "intersection: observer {} ratio={:.3} intersecting={}",
                id,
                entry.intersection_ratio,
                entry.is_intersecting
            );
            if outcome == Observation::Disconnect {
                self.observers.remove(id);
            }
        }
    }

    fn current_top(&self) -> f64 {
        *self.scroll_top.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IntersectionNotifier for ViewportIntersections {
    fn observe(&self, target: Rect, threshold: f64, handler: IntersectionHandler) -> Subscription {
        let observer = Observer {
            target,
            threshold,
            last: Arc::new(Mutex::new(None)),
            handler,
        };
        let (id, sub) = self.observers.insert(observer.clone());
        let entry = observer.entry(self.current_top(), self.viewport_height);
        self.dispatch(id, &observer, &entry);
        sub
    }

    fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
