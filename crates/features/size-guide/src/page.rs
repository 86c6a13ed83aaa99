use crate::icon::Icon;
use crate::motion::{Effect, Motion, Reveal, use_motion};
use atelier_domain::catalog::{DollSize, MeasurementTip, SizingNote, doll_sizes, measurement_tips, sizing_notes};
use atelier_domain::IconName;
use dioxus::prelude::*;
use tracing::debug;

/// Target of the call-to-action link.
pub const CONTACT_HREF: &str = "/contact";

/// The storefront "Size Guide" page.
///
/// Sections, top to bottom: hero, size chart, measurement tips, sizing notes and the
/// contact call to action. Everything rendered comes from the static catalog.
#[component]
pub fn SizeGuidePage() -> Element {
    let motion = use_motion();

    debug!(
        sizes = doll_sizes().len(),
        tips = measurement_tips().len(),
        notes = sizing_notes().len(),
        animated = motion.enabled,
        "Rendering size guide"
    );

    rsx! {
        main { class: "size-guide",
            Hero {}
            SizeChart { stagger_ms: motion.stagger_ms }
            MeasurementTips { stagger_ms: motion.stagger_ms }
            SizingNotes { stagger_ms: motion.stagger_ms }
            ContactCallToAction {}
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        header { class: "size-guide__hero",
            Reveal { motion: Motion::on_mount(Effect::FadeUp),
                span { class: "size-guide__badge",
                    Icon { name: IconName::Sparkles, size: 16 }
                    "Perfect fit, every time"
                }
                h1 { "Size Guide" }
                p { class: "size-guide__lead",
                    "Every outfit in the atelier is cut for a specific doll body. Find your doll below, \
                     compare its measurements and shop with confidence."
                }
            }
        }
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        Reveal { motion: Motion::in_view(Effect::FadeIn), class: "section-heading",
            h2 { "{title}" }
            p { "{subtitle}" }
        }
    }
}

#[component]
fn SizeChart(stagger_ms: u32) -> Element {
    rsx! {
        section { class: "size-guide__section size-chart", id: "size-chart",
            SectionHeading {
                title: "Doll Size Chart",
                subtitle: "Body measurements of the dolls we design for.",
            }
            div { class: "size-chart__grid",
                for (index, size) in doll_sizes().iter().enumerate() {
                    DollSizeCard { key: "{size.name}", size: *size, index, stagger_ms }
                }
            }
        }
    }
}

#[component]
fn DollSizeCard(size: DollSize, index: usize, stagger_ms: u32) -> Element {
    let slug = size.slug();

    rsx! {
        Reveal { motion: Motion::in_view(Effect::FadeUp).staggered(index, stagger_ms),
            article { class: "size-card", id: "{slug}", "data-doll": size.name,
                h3 { class: "size-card__name", "{size.name}" }
                dl { class: "size-card__measurements",
                    for measurement in size.measurements {
                        div { class: "size-card__row", key: "{measurement.label}",
                            dt { "{measurement.label}" }
                            dd { "{measurement.value}" }
                        }
                    }
                }
                p { class: "size-card__description", "{size.description}" }
            }
        }
    }
}

#[component]
fn MeasurementTips(stagger_ms: u32) -> Element {
    rsx! {
        section { class: "size-guide__section tips", id: "measuring",
            SectionHeading {
                title: "How to Measure Your Doll",
                subtitle: "A minute with a tape measure saves a return.",
            }
            div { class: "tips__grid",
                for (index, tip) in measurement_tips().iter().enumerate() {
                    TipCard { key: "{tip.title}", tip: *tip, index, stagger_ms }
                }
            }
        }
    }
}

#[component]
fn TipCard(tip: MeasurementTip, index: usize, stagger_ms: u32) -> Element {
    rsx! {
        Reveal { motion: Motion::in_view(Effect::ScaleIn).staggered(index, stagger_ms),
            div { class: "tip-card",
                div { class: "tip-card__icon",
                    Icon { name: tip.icon }
                }
                h3 { "{tip.title}" }
                p { "{tip.description}" }
            }
        }
    }
}

#[component]
fn SizingNotes(stagger_ms: u32) -> Element {
    rsx! {
        section { class: "size-guide__section notes", id: "notes",
            SectionHeading {
                title: "Sizing Notes",
                subtitle: "Things worth knowing before you order.",
            }
            div { class: "notes__list",
                for (index, note) in sizing_notes().iter().enumerate() {
                    NoteBlock { key: "{note.title}", note: *note, index, stagger_ms }
                }
            }
        }
    }
}

#[component]
fn NoteBlock(note: SizingNote, index: usize, stagger_ms: u32) -> Element {
    rsx! {
        Reveal { motion: Motion::in_view(Effect::FadeUp).staggered(index, stagger_ms),
            div { class: "note",
                h3 { class: "note__title", "{note.title}" }
                p { class: "note__content", "{note.content}" }
            }
        }
    }
}

#[component]
fn ContactCallToAction() -> Element {
    rsx! {
        section { class: "size-guide__section cta",
            Reveal { motion: Motion::in_view(Effect::ScaleIn), class: "cta__panel",
                h2 { "Still Not Sure?" }
                p {
                    "Send us your measurements and a photo of your doll. \
                     We will tell you which size to pick."
                }
                a { class: "cta__button", href: CONTACT_HREF,
                    "Contact Us"
                    Icon { name: IconName::ArrowRight, size: 18 }
                }
            }
        }
    }
}
