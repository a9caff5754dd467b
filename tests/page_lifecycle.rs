use multiverse::content::SECTIONS;
use multiverse::platform::{IntersectionNotifier, ScrollNotifier, ViewportHost};
use multiverse::{Page, PageConfig, RevealState, Viewport};

fn config() -> PageConfig {
    PageConfig {
        seed: Some(2024),
        ..Default::default()
    }
}

#[test]
fn mount_subscribes_tracker_and_one_observer_per_section() {
    let host = ViewportHost::new(Viewport::default());
    let page = Page::mount_on(host.clone(), config()).expect("mount");
    assert_eq!(host.scroll().listener_count(), 1);
    assert_eq!(host.intersections().observer_count(), SECTIONS.len());
    assert_eq!(page.reveal_controllers().len(), SECTIONS.len());
}

#[test]
fn unmount_releases_every_subscription() {
    let host = ViewportHost::new(Viewport::default());
    let page = Page::mount_on(host.clone(), config()).expect("mount");
    page.scroll_to(300.0);
    assert!(host.active_subscriptions() > 0);

    page.unmount();
    assert_eq!(host.active_subscriptions(), 0);

    // the host keeps working without any listeners
    host.scroll_to(5000.0);
    assert_eq!(host.active_subscriptions(), 0);
}

#[test]
fn dropping_page_releases_every_subscription() {
    let host = ViewportHost::new(Viewport::default());
    {
        let _page = Page::mount_on(host.clone(), config()).expect("mount");
        assert!(host.active_subscriptions() > 0);
    }
    assert_eq!(host.active_subscriptions(), 0);
}

#[test]
fn sections_reveal_progressively_and_stay_revealed() {
    let page = Page::mount(config()).expect("mount");
    let max = page.layout().max_scroll(720.0);

    let mut previous = page.section_states();
    let mut y = 0.0;
    while y <= max {
        page.scroll_to(y);
        let states = page.section_states();
        for (before, after) in previous.iter().zip(&states) {
            if *before == RevealState::Visible {
                assert_eq!(*after, RevealState::Visible);
            }
        }
        previous = states;
        y += 50.0;
    }
    page.scroll_to(max);
    assert!(page.section_states().iter().all(|s| *s == RevealState::Visible));

    page.scroll_to(0.0);
    assert!(page.section_states().iter().all(|s| *s == RevealState::Visible));
    assert_eq!(page.hero_offset(), 0.0);
}

#[test]
fn hero_follows_scroll_with_parallax() {
    let page = Page::mount(config()).expect("mount");
    for (y, hero) in [(0.0, 0.0), (100.0, 30.0), (500.0, 150.0)] {
        page.scroll_to(y);
        assert_eq!(page.scroll_offset(), y);
        assert_eq!(page.hero_offset(), hero);
    }
}

#[test]
fn field_is_stable_for_the_page_lifetime() {
    let page = Page::mount(PageConfig::default()).expect("mount");
    let digest = page.field().digest();
    for y in [0.0, 400.0, 1200.0, 0.0] {
        page.scroll_to(y);
        assert_eq!(page.field().digest(), digest);
    }
}

#[test]
fn seeded_pages_share_a_field() {
    let a = Page::mount(config()).expect("mount");
    let b = Page::mount(config()).expect("mount");
    assert_eq!(a.field(), b.field());
}

#[test]
fn snapshot_reports_scroll_state() {
    let page = Page::mount(config()).expect("mount");
    page.scroll_to(100.0);
    let snap = page.snapshot();
    assert_eq!(snap.scroll_offset, 100.0);
    assert_eq!(snap.hero_offset, 30.0);
    assert_eq!(snap.sections.len(), SECTIONS.len());
    assert_eq!(snap.sections[0].state, RevealState::Visible);
    assert_eq!(snap.sections[0].presentation.opacity, 1.0);
    assert!(snap.field.is_some());

    let json: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
    assert_eq!(json["sections"][0]["state"], "visible");
    assert_eq!(json["field"]["particles"].as_array().unwrap().len(), 80);
}

#[test]
fn invalid_threshold_fails_to_mount() {
    let cfg = PageConfig {
        reveal_threshold: 1.5,
        ..config()
    };
    assert!(Page::mount(cfg).is_err());
}

#[test]
fn non_finite_scroll_offsets_are_ignored() {
    let page = Page::mount(config()).expect("mount");
    page.scroll_to(100.0);
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        page.scroll_to(bad);
        assert_eq!(page.scroll_offset(), 100.0);
        assert_eq!(page.hero_offset(), 30.0);
    }
    let json = page.snapshot().without_field().to_json().expect("json");
    assert!(!json.contains("null"));
}
