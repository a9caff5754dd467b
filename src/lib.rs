//! Multiverse landing page core
//!
//! The logic behind a single scrolling landing page: a procedurally placed
//! cosmic background, a hero block with a scroll parallax, and content
//! sections that fade in the first time they scroll into view.
//!
//! # Components
//!
//! - **Field generator** ([`field`]): 80 star particles and 12 glow orbs,
//!   generated once per page load
//! - **Reveal controller** ([`reveal`]): per-section one-way latch driven by
//!   viewport intersection
//! - **Scroll tracker** ([`scroll`]): page-wide scroll offset and parallax
//! - **Host platform** ([`platform`]): scroll and intersection notifiers with
//!   owned subscriptions
//!
//! # Example
//!
//! ```
//! use multiverse::{Page, PageConfig, RevealState};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let page = Page::mount(PageConfig::default())?;
//! assert_eq!(page.field().particles().len(), 80);
//!
//! page.scroll_to(100.0);
//! assert_eq!(page.hero_offset(), 30.0);
//! assert_eq!(page.section_states()[0], RevealState::Visible);
//!
//! page.unmount();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod content;
pub mod field;
pub mod page;
pub mod platform;
pub mod rendering;
pub mod reveal;
pub mod scroll;

pub use field::{Field, Particle, Universe};
pub use page::{Page, PageSnapshot};
pub use reveal::{Presentation, RevealController, RevealState};
pub use scroll::ScrollTracker;

/// Configuration for a mounted page
///
/// The defaults reproduce the production page: 10% reveal threshold, one
/// second transitions, 0.3 parallax factor and an unseeded field.
///
/// # Examples
///
/// ```
/// let cfg = multiverse::PageConfig::default();
/// assert_eq!(cfg.reveal_threshold, 0.1);
/// assert!(cfg.seed.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Viewport dimensions
    pub viewport: Viewport,
    /// Fraction of a section that must be visible before it is revealed
    pub reveal_threshold: f64,
    /// Duration of the reveal transition in milliseconds
    pub reveal_transition_ms: u64,
    /// Fraction of the scroll offset applied to the hero block
    pub parallax_factor: f64,
    /// Seed for a reproducible background (`None` draws fresh randomness)
    pub seed: Option<u64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            reveal_threshold: reveal::DEFAULT_THRESHOLD,
            reveal_transition_ms: reveal::DEFAULT_TRANSITION_MS,
            parallax_factor: scroll::DEFAULT_PARALLAX_FACTOR,
            seed: None,
        }
    }
}

impl PageConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(Error::ConfigError(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(Error::ConfigError(format!(
                "reveal threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !self.parallax_factor.is_finite() {
            return Err(Error::ConfigError(format!(
                "parallax factor must be finite, got {}",
                self.parallax_factor
            )));
        }
        Ok(())
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Mount a page with the given configuration on a fresh host.
pub fn new_page(config: PageConfig) -> Result<Page> {
    Page::mount(config)
}
