//! Viewport reveal controller.
//!
//! One controller per content block. It starts [`RevealState::Hidden`] and
//! latches to [`RevealState::Visible`] the first time the block's visible
//! fraction reaches the threshold. There is no way back to hidden.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use serde::Serialize;

use crate::platform::{IntersectionEntry, IntersectionNotifier, Observation, Subscription};
use crate::rendering::layout::Rect;
use crate::{Error, Result};

/// Default fraction of a block that must be on screen
pub const DEFAULT_THRESHOLD: f64 = 0.1;
/// Duration of the hidden-to-shown transition
pub const DEFAULT_TRANSITION_MS: u64 = 1000;
/// Downward offset of a hidden block in px
pub const HIDDEN_OFFSET_PX: f64 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    Hidden,
    Visible,
}

/// Presentation values the rendering layer applies to a block
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Presentation {
    pub opacity: f64,
    pub translate_y_px: f64,
    pub transition_ms: u64,
}

impl RevealState {
    pub fn presentation(self, transition_ms: u64) -> Presentation {
        match self {
            RevealState::Hidden => Presentation {
                opacity: 0.0,
                translate_y_px: HIDDEN_OFFSET_PX,
                transition_ms,
            },
            RevealState::Visible => Presentation {
                opacity: 1.0,
                translate_y_px: 0.0,
                transition_ms,
            },
        }
    }
}

struct Latch {
    threshold: f64,
    state: Mutex<RevealState>,
    notifications: AtomicUsize,
}

impl Latch {
    fn state(&self) -> RevealState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, ratio: f64) -> RevealState {
        self.notifications.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == RevealState::Hidden && ratio >= self.threshold {
            debug!("reveal: ratio {:.3} reached threshold {}", ratio, self.threshold);
            *state = RevealState::Visible;
        }
        *state
    }

    /// Count an entry that cannot reveal the block.
    fn skip(&self) -> RevealState {
        self.notifications.fetch_add(1, Ordering::SeqCst);
        self.state()
    }
}

/// One-way latch driven by intersection entries.
pub struct RevealController {
    latch: Arc<Latch>,
    transition_ms: u64,
    subscription: Option<Subscription>,
}

impl RevealController {
    /// Create a hidden controller. `threshold` must lie in `[0, 1]`.
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::ConfigError(format!(
                "reveal threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        Ok(Self::hidden(threshold))
    }

    fn hidden(threshold: f64) -> Self {
        Self {
            latch: Arc::new(Latch {
                threshold,
                state: Mutex::new(RevealState::Hidden),
                notifications: AtomicUsize::new(0),
            }),
            transition_ms: DEFAULT_TRANSITION_MS,
            subscription: None,
        }
    }

    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.latch.threshold
    }

    /// Feed one visible-fraction reading and return the resulting state.
    pub fn observe_ratio(&self, ratio: f64) -> RevealState {
        self.latch.apply(ratio)
    }

    /// Start observing `region`. Any previous observation is released.
    ///
    /// The notifier drops the observation once the block is revealed.
    pub fn observe(&mut self, notifier: &dyn IntersectionNotifier, region: Rect) {
        self.detach();
        let latch = self.latch.clone();
        let handler = Arc::new(move |entry: &IntersectionEntry| {
            let state = if entry.is_intersecting {
                latch.apply(entry.intersection_ratio)
            } else {
                latch.skip()
            };
            match state {
                RevealState::Visible => Observation::Disconnect,
                RevealState::Hidden => Observation::Continue,
            }
        });
        self.subscription = Some(notifier.observe(region, self.latch.threshold, handler));
    }

    /// Release the observation, whether or not the block was revealed.
    pub fn detach(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.unsubscribe();
        }
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn state(&self) -> RevealState {
        self.latch.state()
    }

    pub fn is_visible(&self) -> bool {
        self.state() == RevealState::Visible
    }

    pub fn presentation(&self) -> Presentation {
        self.state().presentation(self.transition_ms)
    }

    /// Entries delivered to this controller so far
    pub fn notifications(&self) -> usize {
        self.latch.notifications.load(Ordering::SeqCst)
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::hidden(DEFAULT_THRESHOLD)
    }
}
