//! Page root: owns the generated field, the scroll tracker and one reveal
//! controller per section for the lifetime of a mounted page.

use log::debug;
use serde::Serialize;

use crate::content::SECTIONS;
use crate::field::Field;
use crate::platform::ViewportHost;
use crate::rendering::{layout_page, render_document, PageLayout, RevealBlock};
use crate::reveal::{Presentation, RevealController, RevealState};
use crate::scroll::ScrollTracker;
use crate::{Error, PageConfig, Result};

/// Base vertical position of the hero block before parallax
const HERO_BASE: f64 = 0.0;

/// Reveal state of one section at snapshot time
#[derive(Debug, Clone, Serialize)]
pub struct SectionSnapshot {
    pub id: &'static str,
    pub state: RevealState,
    pub presentation: Presentation,
}

/// Serializable view of a mounted page
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub scroll_offset: f64,
    pub hero_offset: f64,
    pub document_height: f64,
    pub sections: Vec<SectionSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}

impl PageSnapshot {
    /// Drop the field, keeping only scroll-driven state.
    pub fn without_field(mut self) -> Self {
        self.field = None;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct Page {
    config: PageConfig,
    host: ViewportHost,
    field: Field,
    layout: PageLayout,
    tracker: ScrollTracker,
    reveals: Vec<RevealController>,
}

impl Page {
    /// Mount on a fresh host sized to the configured viewport.
    pub fn mount(config: PageConfig) -> Result<Self> {
        let host = ViewportHost::new(config.viewport);
        Self::mount_on(host, config)
    }

    /// Mount on an existing host.
    ///
    /// The field is generated before anything else is attached, so it is
    /// complete before the first paint.
    pub fn mount_on(host: ViewportHost, config: PageConfig) -> Result<Self> {
        config.validate()?;
        if host.viewport() != config.viewport {
            return Err(Error::ConfigError(format!(
                "host viewport {}x{} does not match configured {}x{}",
                host.viewport().width,
                host.viewport().height,
                config.viewport.width,
                config.viewport.height
            )));
        }

        let field = match config.seed {
            Some(seed) => Field::generate_seeded(seed),
            None => Field::generate(),
        };
        let layout = layout_page(SECTIONS, config.viewport);
        let tracker = ScrollTracker::mount(host.scroll(), config.parallax_factor);

        let mut reveals = Vec::with_capacity(layout.sections.len());
        for section in &layout.sections {
            let mut controller = RevealController::new(config.reveal_threshold)?
                .with_transition_ms(config.reveal_transition_ms);
            controller.observe(host.intersections(), section.rect);
            reveals.push(controller);
        }

        debug!(
            "page mounted: {} sections, document height {}px, field {}",
            reveals.len(),
            layout.document_height,
            &field.digest()[..12]
        );

        Ok(Self {
            config,
            host,
            field,
            layout,
            tracker,
            reveals,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn host(&self) -> &ViewportHost {
        &self.host
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Scroll the window, clamped to the document. A non-finite offset is
    /// ignored.
    pub fn scroll_to(&self, offset: f64) {
        if !offset.is_finite() {
            debug!("page: ignoring non-finite scroll offset {}", offset);
            return;
        }
        let max = self.layout.max_scroll(f64::from(self.config.viewport.height));
        let clamped = offset.clamp(0.0, max);
        if clamped != offset {
            debug!("page: scroll {} clamped to {}", offset, clamped);
        }
        self.host.scroll_to(clamped);
    }

    pub fn scroll_offset(&self) -> f64 {
        self.tracker.offset()
    }

    /// Displayed hero position at the current scroll offset
    pub fn hero_offset(&self) -> f64 {
        self.tracker.hero_offset(HERO_BASE)
    }

    pub fn section_states(&self) -> Vec<RevealState> {
        self.reveals.iter().map(RevealController::state).collect()
    }

    pub fn reveal_controllers(&self) -> &[RevealController] {
        &self.reveals
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let sections = self
            .layout
            .sections
            .iter()
            .zip(&self.reveals)
            .map(|(section, reveal)| SectionSnapshot {
                id: section.id,
                state: reveal.state(),
                presentation: reveal.presentation(),
            })
            .collect();
        PageSnapshot {
            scroll_offset: self.scroll_offset(),
            hero_offset: self.hero_offset(),
            document_height: self.layout.document_height,
            sections,
            field: Some(self.field.clone()),
        }
    }

    /// Render the page as it would be painted right now.
    pub fn render_html(&self) -> String {
        let blocks: Vec<RevealBlock<'_>> = SECTIONS
            .iter()
            .zip(&self.reveals)
            .map(|(section, reveal)| RevealBlock {
                section,
                presentation: reveal.presentation(),
                visible: reveal.is_visible(),
            })
            .collect();
        render_document(&self.field, self.hero_offset(), &blocks)
    }

    /// Tear the page down, releasing every subscription it holds.
    pub fn unmount(mut self) {
        self.tracker.unmount();
        for reveal in &mut self.reveals {
            reveal.detach();
        }
        debug!("page unmounted; {} host subscriptions remain", self.host.active_subscriptions());
    }
}
