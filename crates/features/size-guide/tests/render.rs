use atelier_domain::IconName;
use atelier_domain::catalog::{doll_sizes, measurement_tips, sizing_notes};
use atelier_size_guide::{CONTACT_HREF, Icon, MotionConfig, SizeGuidePage, icon_paths};
use dioxus::prelude::*;

fn render_page(motion: Option<MotionConfig>) -> String {
    let mut dom = VirtualDom::new(SizeGuidePage);
    if let Some(motion) = motion {
        dom = dom.with_root_context(motion);
    }
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn renders_every_doll_size_with_all_measurements() {
    let html = render_page(None);

    for size in doll_sizes() {
        assert!(html.contains(&format!(r#"data-doll="{}""#, size.name)), "missing card {}", size.name);
        assert!(html.contains(&format!(r#"id="{}""#, size.slug())), "missing anchor {}", size.slug());
        assert!(html.contains(size.description), "missing description of {}", size.name);

        for m in size.measurements {
            let pair = format!("<dt>{}</dt><dd>{}</dd>", m.label, m.value);
            assert!(html.contains(&pair), "missing {pair} for {}", size.name);
        }
    }
}

#[test]
fn doll_sizes_keep_dataset_order() {
    let html = render_page(None);

    let positions: Vec<usize> = doll_sizes()
        .iter()
        .map(|s| html.find(&format!(r#"data-doll="{}""#, s.name)).expect("card rendered"))
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "cards out of order: {positions:?}");
}

#[test]
fn renders_measurement_tips_with_icons() {
    let html = render_page(None);

    for tip in measurement_tips() {
        assert!(html.contains(&format!(r#"data-icon="{}""#, tip.icon.name())));
        assert!(html.contains(tip.title));
        assert!(html.contains(tip.description));
    }
}

#[test]
fn renders_sizing_notes() {
    let html = render_page(None);

    for note in sizing_notes() {
        assert!(html.contains(&format!(r#"<h3 class="note__title">{}</h3>"#, note.title)));
        assert!(html.contains(&format!(r#"<p class="note__content">{}</p>"#, note.content)));
    }
}

#[test]
fn call_to_action_links_to_contact_page() {
    let html = render_page(None);

    assert_eq!(CONTACT_HREF, "/contact");
    assert!(html.contains(r#"href="/contact""#));
    assert!(html.contains(r#"data-icon="arrow-right""#));
}

#[test]
fn reveals_are_animated_by_default() {
    let html = render_page(None);

    assert!(html.contains("reveal reveal--fade-up reveal--mount"));
    assert!(html.contains("reveal--in-view"));
    assert!(!html.contains("reveal--static"));
    // Third card of the chart with the default 100ms stagger.
    assert!(html.contains("animation-delay: 200ms; animation-duration: 600ms;"));
}

#[test]
fn motion_settings_come_from_context() {
    let html = render_page(Some(MotionConfig { enabled: false, duration_ms: 250, stagger_ms: 40 }));

    let reveals = html.matches("reveal reveal--").count();
    assert!(reveals > doll_sizes().len());
    assert_eq!(html.matches("reveal--static").count(), reveals);
    assert!(html.contains("animation-delay: 80ms; animation-duration: 250ms;"));
}

#[test]
fn icon_renders_all_paths() {
    let html = dioxus_ssr::render_element(rsx! {
        Icon { name: IconName::Ruler, size: 32, class: "tip-card__glyph" }
    });

    assert!(html.starts_with("<svg"));
    assert!(html.contains(r#"class="icon tip-card__glyph""#));
    assert!(html.contains(r#"width="32""#));
    assert!(html.contains(r#"data-icon="ruler""#));
    assert!(html.contains(r#"aria-hidden="true""#));
    assert_eq!(html.matches("<path").count(), icon_paths(IconName::Ruler).len());
}
