use multiverse::content::SECTIONS;
use multiverse::{Page, PageConfig};
use scraper::{Html, Selector};

fn mounted() -> Page {
    Page::mount(PageConfig {
        seed: Some(11),
        ..Default::default()
    })
    .expect("mount")
}

fn count(doc: &Html, selector: &str) -> usize {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

#[test]
fn background_layer_contains_every_decoration() {
    let doc = Html::parse_document(&mounted().render_html());
    assert_eq!(count(&doc, ".cosmic-background .star-particle"), 80);
    assert_eq!(count(&doc, ".cosmic-background .universe-orb"), 12);
    assert_eq!(count(&doc, ".scanlines"), 1);
}

#[test]
fn sections_start_hidden_and_reveal_after_scroll() {
    let page = mounted();
    let doc = Html::parse_document(&page.render_html());
    assert_eq!(count(&doc, "section.reveal"), SECTIONS.len());
    assert_eq!(count(&doc, "section.reveal-hidden"), SECTIONS.len());

    page.scroll_to(100.0);
    let doc = Html::parse_document(&page.render_html());
    assert_eq!(count(&doc, "section.reveal-shown"), 1);

    let sel = Selector::parse("section#is-it-real").unwrap();
    let first = doc.select(&sel).next().expect("first section");
    let style = first.value().attr("style").unwrap();
    assert!(style.contains("opacity: 1;"));
    assert!(style.contains("transition: all 1000ms;"));
}

#[test]
fn hero_carries_parallax_transform() {
    let page = mounted();
    page.scroll_to(100.0);
    let doc = Html::parse_document(&page.render_html());
    let sel = Selector::parse(".hero-content").unwrap();
    let hero = doc.select(&sel).next().expect("hero");
    assert_eq!(hero.value().attr("style"), Some("transform: translateY(30px);"));

    let title = Selector::parse("h1.hero-title").unwrap();
    let text: String = doc.select(&title).next().unwrap().text().collect();
    assert_eq!(text, "MULTIVERSE");
}

#[test]
fn content_is_rendered_as_text() {
    let doc = Html::parse_document(&mounted().render_html());
    assert_eq!(count(&doc, ".theory-card"), 4);
    assert_eq!(count(&doc, ".implication-card"), 3);
    assert_eq!(count(&doc, ".evidence-box p.conclusion"), 1);

    let sel = Selector::parse("blockquote").unwrap();
    let quote: String = doc.select(&sel).next().unwrap().text().collect();
    assert!(quote.starts_with('"'));
    assert!(quote.contains("stranger than we can think"));
}
