//! Paint commands for the decorative background and animated blocks

use crate::field::{Field, Rgba};
use crate::reveal::Presentation;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Radial-gradient glow orb
    Orb {
        left_pct: f64,
        top_pct: f64,
        size_px: f64,
        color: Rgba,
        delay_s: f64,
    },
    /// Twinkling star with a soft glow
    Star {
        left_pct: f64,
        top_pct: f64,
        size_px: f64,
        hue: f64,
        opacity: f64,
        duration_s: f64,
    },
}

impl PaintCommand {
    /// CSS class carrying the element's keyframe animation
    pub fn class_name(&self) -> &'static str {
        match self {
            PaintCommand::Orb { .. } => "universe-orb",
            PaintCommand::Star { .. } => "star-particle",
        }
    }

    /// Inline style for the element
    pub fn style(&self) -> String {
        match self {
            PaintCommand::Orb { left_pct, top_pct, size_px, color, delay_s } => format!(
                "left: {left_pct}%; top: {top_pct}%; width: {size_px}px; height: {size_px}px; \
                 background: radial-gradient(circle at 30% 30%, {color}, transparent 70%); \
                 animation-delay: {delay_s}s;"
            ),
            PaintCommand::Star { left_pct, top_pct, size_px, hue, opacity, duration_s } => format!(
                "left: {left_pct}%; top: {top_pct}%; width: {size_px}px; height: {size_px}px; \
                 background-color: hsla({hue}, 80%, 80%, {opacity}); \
                 animation-duration: {duration_s}s; \
                 box-shadow: 0 0 {glow}px hsla({hue}, 80%, 70%, 0.5);",
                glow = size_px * 2.0
            ),
        }
    }
}

/// Background paint order: orbs underneath, stars on top.
pub fn paint_background(field: &Field) -> Vec<PaintCommand> {
    let orbs = field.universes().iter().map(|u| PaintCommand::Orb {
        left_pct: u.x,
        top_pct: u.y,
        size_px: u.size,
        color: u.color,
        delay_s: u.delay,
    });
    let stars = field.particles().iter().map(|p| PaintCommand::Star {
        left_pct: p.x,
        top_pct: p.y,
        size_px: p.size,
        hue: p.hue,
        opacity: p.opacity,
        duration_s: p.speed,
    });
    orbs.chain(stars).collect()
}

/// Inline style for a reveal block in the given presentation.
pub fn block_style(p: &Presentation) -> String {
    format!(
        "opacity: {}; transform: translateY({}px); transition: all {}ms;",
        p.opacity, p.translate_y_px, p.transition_ms
    )
}

/// Inline style for the hero block shifted by the parallax offset.
pub fn hero_style(offset_px: f64) -> String {
    format!("transform: translateY({}px);", offset_px)
}
