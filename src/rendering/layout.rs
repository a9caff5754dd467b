//! Block layout for the landing page: hero, sections and footer stacked
//! vertically in document coordinates.

use serde::Serialize;

use crate::content::Section;
use crate::Viewport;

/// Estimated glyph advance in px
const CHAR_WIDTH: f64 = 8.0;
const LINE_HEIGHT: f64 = 32.0;
/// Vertical padding above and below each section
const SECTION_PADDING: f64 = 64.0;
/// Horizontal padding on each side of the page
const SIDE_PADDING: f64 = 16.0;
/// Gap between text blocks inside a section
const BLOCK_GAP: f64 = 24.0;
const MAX_CONTENT_WIDTH: f64 = 896.0;
const FOOTER_HEIGHT: f64 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Region occupied by one content section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBox {
    pub id: &'static str,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub hero: Rect,
    pub sections: Vec<SectionBox>,
    pub footer: Rect,
    pub document_height: f64,
}

impl PageLayout {
    /// Largest scroll offset that keeps the viewport inside the document.
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        (self.document_height - viewport_height).max(0.0)
    }
}

/// Number of lines `text` wraps to at `chars_per_line`.
pub fn wrapped_lines(text: &str, chars_per_line: usize) -> usize {
    let chars_per_line = chars_per_line.max(1);
    let mut lines = 0usize;
    let mut cur = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if cur > 0 && cur + len + 1 > chars_per_line {
            lines += 1;
            cur = len;
        } else {
            if cur > 0 {
                cur += 1;
            }
            cur += len;
        }
    }
    if cur > 0 {
        lines += 1;
    }
    lines.max(1)
}

/// Compute the document layout for `sections` at `viewport`.
/// - the hero fills the first screen
/// - each section is as tall as its wrapped text plus padding
/// - the footer closes the document
pub fn layout_page(sections: &[Section], viewport: Viewport) -> PageLayout {
    let page_width = f64::from(viewport.width);
    let hero = Rect {
        x: 0.0,
        y: 0.0,
        width: page_width,
        height: f64::from(viewport.height),
    };

    let content_width = (page_width - 2.0 * SIDE_PADDING).clamp(CHAR_WIDTH, MAX_CONTENT_WIDTH);
    let chars_per_line = (content_width / CHAR_WIDTH) as usize;

    let mut y = hero.bottom();
    let mut boxes = Vec::with_capacity(sections.len());
    for section in sections {
        let blocks = section.text_blocks();
        let lines: usize = blocks.iter().map(|t| wrapped_lines(t, chars_per_line)).sum();
        let gaps = blocks.len().saturating_sub(1) as f64 * BLOCK_GAP;
        let height = lines as f64 * LINE_HEIGHT + gaps + 2.0 * SECTION_PADDING;
        boxes.push(SectionBox {
            id: section.id,
            rect: Rect {
                x: SIDE_PADDING,
                y,
                width: page_width - 2.0 * SIDE_PADDING,
                height,
            },
        });
        y += height;
    }

    let footer = Rect {
        x: 0.0,
        y,
        width: page_width,
        height: FOOTER_HEIGHT,
    };

    PageLayout {
        hero,
        sections: boxes,
        document_height: footer.bottom(),
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SECTIONS;

    #[test]
    fn layout_page_stacks_sections_below_hero() {
        let v = Viewport { width: 1280, height: 720 };
        let layout = layout_page(SECTIONS, v);
        assert_eq!(layout.hero.height, 720.0);
        assert_eq!(layout.sections.len(), SECTIONS.len());
        assert_eq!(layout.sections[0].rect.y, 720.0);
        for pair in layout.sections.windows(2) {
            assert_eq!(pair[0].rect.bottom(), pair[1].rect.y);
        }
        assert!(layout.document_height > 720.0);
        assert_eq!(layout.footer.bottom(), layout.document_height);
    }

    #[test]
    fn narrow_viewports_produce_taller_sections() {
        let wide = layout_page(SECTIONS, Viewport { width: 1280, height: 720 });
        let narrow = layout_page(SECTIONS, Viewport { width: 360, height: 720 });
        assert!(narrow.sections[0].rect.height > wide.sections[0].rect.height);
    }

    #[test]
    fn wrapped_lines_breaks_on_words() {
        assert_eq!(wrapped_lines("", 10), 1);
        assert_eq!(wrapped_lines("hello world", 11), 1);
        assert_eq!(wrapped_lines("hello world", 10), 2);
        assert_eq!(wrapped_lines("a b c d", 3), 2);
    }
}
