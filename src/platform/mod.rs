//! Host platform surface: scroll and viewport-intersection notifications
//!
//! This module contains the public types and traits the page core consumes
//! from its windowing environment, plus an in-memory host that derives
//! notifications from a viewport and a scroll position.

pub mod intersection;
pub mod scroll;
pub mod subscription;

pub use intersection::{
    IntersectionEntry, IntersectionHandler, IntersectionNotifier, Observation, ViewportIntersections,
};
pub use scroll::{ScrollHandler, ScrollNotifier, WindowScroll};
pub use subscription::Subscription;

use log::debug;

use crate::Viewport;

/// The windowing environment a page is mounted on.
///
/// Clones share state, so a test can keep a handle to the host and inspect
/// listener counts after the page is gone.
#[derive(Clone)]
pub struct ViewportHost {
    viewport: Viewport,
    scroll: WindowScroll,
    intersections: ViewportIntersections,
}

impl ViewportHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll: WindowScroll::new(),
            intersections: ViewportIntersections::new(f64::from(viewport.height)),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll(&self) -> &WindowScroll {
        &self.scroll
    }

    pub fn intersections(&self) -> &ViewportIntersections {
        &self.intersections
    }

    /// Scroll the window: scroll listeners first, then intersection observers.
    pub fn scroll_to(&self, offset: f64) {
        debug!("host: scroll_to {}", offset);
        self.scroll.scroll_to(offset);
        self.intersections.update(offset);
    }

    /// Live scroll listeners plus intersection observers
    pub fn active_subscriptions(&self) -> usize {
        self.scroll.listener_count() + self.intersections.observer_count()
    }
}

impl Default for ViewportHost {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
