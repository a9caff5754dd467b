//! Rendering layer: document layout, background paint commands and HTML output.

pub mod html;
pub mod layout;
pub mod paint;

pub use html::{render_document, RevealBlock};
pub use layout::{layout_page, PageLayout, Rect, SectionBox};
pub use paint::{paint_background, PaintCommand};
