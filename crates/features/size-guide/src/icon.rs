use atelier_domain::IconName;
use dioxus::prelude::*;

// Lucide outline set, 24x24 grid, stroke-only.
const RULER: &[&str] = &[
    "M21.3 15.3a2.4 2.4 0 0 1 0 3.4l-2.6 2.6a2.4 2.4 0 0 1-3.4 0L2.7 8.7a2.41 2.41 0 0 1 0-3.4l2.6-2.6a2.41 2.41 0 0 1 3.4 0Z",
    "m14.5 12.5 2-2",
    "m11.5 9.5 2-2",
    "m8.5 6.5 2-2",
    "m17.5 15.5 2-2",
];

const SHIRT: &[&str] = &[
    "M20.38 3.46 16 2a4 4 0 0 1-8 0L3.62 3.46a2 2 0 0 0-1.34 2.23l.58 3.47a1 1 0 0 0 .99.84H6v10c0 1.1.9 2 2 2h8a2 2 0 0 0 2-2V10h2.15a1 1 0 0 0 .99-.84l.58-3.47a2 2 0 0 0-1.34-2.23z",
];

const INFO: &[&str] = &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 16v-4", "M12 8h.01"];

const SPARKLES: &[&str] = &[
    "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
    "M20 3v4",
    "M22 5h-4",
    "M4 17v2",
    "M5 18H3",
];

const ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];

/// SVG path data for `name`.
#[must_use]
pub const fn icon_paths(name: IconName) -> &'static [&'static str] {
    match name {
        IconName::Ruler => RULER,
        IconName::Shirt => SHIRT,
        IconName::Info => INFO,
        IconName::Sparkles => SPARKLES,
        IconName::ArrowRight => ARROW_RIGHT,
    }
}

/// Inline outline icon, coloured with the surrounding text colour.
#[component]
pub fn Icon(
    name: IconName,
    #[props(default = 24)] size: u32,
    #[props(into, default)] class: String,
) -> Element {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };

    rsx! {
        svg {
            class: "{class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "data-icon": name.name(),
            "aria-hidden": "true",
            for d in icon_paths(name) {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        use strum::IntoEnumIterator;

        for name in IconName::iter() {
            let paths = icon_paths(name);
            assert!(!paths.is_empty(), "{name} has no path data");
            assert!(paths.iter().all(|d| d.starts_with(['M', 'm'])));
        }
    }
}
