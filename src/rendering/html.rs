//! HTML emitter for a page state: background, hero, reveal sections, footer

use crate::content::{Section, SectionBody, FOOTER, HERO};
use crate::field::Field;
use crate::reveal::Presentation;

use super::paint::{block_style, hero_style, paint_background};

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A section together with the presentation its reveal state maps to
pub struct RevealBlock<'a> {
    pub section: &'a Section,
    pub presentation: Presentation,
    pub visible: bool,
}

/// Render the complete page document.
pub fn render_document(field: &Field, hero_offset: f64, blocks: &[RevealBlock<'_>]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Multiverse</title></head>\n<body>\n");

    out.push_str("<div class=\"cosmic-background\" aria-hidden=\"true\">\n");
    out.push_str("<div class=\"nebula-1\"></div><div class=\"nebula-2\"></div>\n");
    for cmd in paint_background(field) {
        out.push_str(&format!(
            "<div class=\"{}\" style=\"{}\"></div>\n",
            cmd.class_name(),
            escape(&cmd.style())
        ));
    }
    out.push_str("<div class=\"scanlines\"></div>\n</div>\n");

    out.push_str(&format!(
        "<header class=\"hero\"><div class=\"hero-content\" style=\"{}\">\
         <span class=\"eyebrow\">{}</span><h1 class=\"hero-title\">{}</h1>\
         <p class=\"hero-quote\">{}</p><span class=\"attribution\">{}</span>\
         </div></header>\n",
        hero_style(hero_offset),
        escape(HERO.eyebrow),
        escape(HERO.title),
        escape(HERO.quote),
        escape(HERO.attribution)
    ));

    out.push_str("<main>\n");
    for block in blocks {
        render_section(&mut out, block);
    }
    out.push_str("</main>\n");

    out.push_str(&format!("<footer><p>{}</p></footer>\n</body>\n</html>\n", escape(FOOTER)));
    out
}

fn render_section(out: &mut String, block: &RevealBlock<'_>) {
    let section = block.section;
    let state_class = if block.visible { "reveal-shown" } else { "reveal-hidden" };
    out.push_str(&format!(
        "<section id=\"{}\" class=\"reveal {}\" style=\"{}\">",
        escape(section.id),
        state_class,
        block_style(&block.presentation)
    ));
    if let Some(heading) = section.heading {
        out.push_str(&format!("<h2>{}</h2>", escape(heading)));
    }
    match section.body {
        SectionBody::Prose(paragraphs) => {
            for p in paragraphs {
                out.push_str(&format!("<p>{}</p>", escape(p)));
            }
        }
        SectionBody::Theories(cards) => {
            for c in cards {
                out.push_str(&format!(
                    "<div class=\"theory-card\" style=\"animation-delay: {}ms;\"><span class=\"icon\">{}</span><h3>{}</h3><p>{}</p></div>",
                    c.delay_ms,
                    escape(c.icon),
                    escape(c.title),
                    escape(c.description)
                ));
            }
        }
        SectionBody::Evidence(paragraphs) => {
            out.push_str("<div class=\"evidence-box\">");
            let last = paragraphs.len().saturating_sub(1);
            for (i, p) in paragraphs.iter().enumerate() {
                let class = if i == last { " class=\"conclusion\"" } else { "" };
                out.push_str(&format!("<p{}>{}</p>", class, escape(p)));
            }
            out.push_str("</div>");
        }
        SectionBody::Implications(cards) => {
            for c in cards {
                out.push_str(&format!(
                    "<div class=\"implication-card\"><div class=\"icon\">{}</div><h3>{}</h3><p>{}</p></div>",
                    escape(c.icon),
                    escape(c.title),
                    escape(c.description)
                ));
            }
        }
        SectionBody::Quote { text, cite } => {
            out.push_str(&format!(
                "<blockquote>{}</blockquote><cite>{}</cite>",
                escape(text),
                escape(cite)
            ));
        }
    }
    out.push_str("</section>\n");
}
