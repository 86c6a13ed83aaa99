//! Entrance and scroll-reveal animations.
//!
//! A [`Motion`] only describes an animation; the keyframes and the scroll-driven
//! timeline live in the page stylesheet and are selected through CSS classes.

use atelier_domain::config::MotionConfig;
use dioxus::prelude::*;
use strum_macros::IntoStaticStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Effect {
    #[default]
    FadeUp,
    FadeIn,
    ScaleIn,
}

/// When the animation starts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Trigger {
    /// As soon as the element is mounted.
    #[default]
    Mount,
    /// When the element scrolls into the viewport.
    InView,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub effect: Effect,
    pub trigger: Trigger,
    pub delay_ms: u32,
    /// Falls back to [`MotionConfig::duration_ms`] when unset.
    pub duration_ms: Option<u32>,
}

impl Motion {
    #[must_use]
    pub const fn on_mount(effect: Effect) -> Self {
        Self { effect, trigger: Trigger::Mount, delay_ms: 0, duration_ms: None }
    }

    #[must_use]
    pub const fn in_view(effect: Effect) -> Self {
        Self { effect, trigger: Trigger::InView, delay_ms: 0, duration_ms: None }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Delays the n-th item of a list by `index * stagger_ms` on top of the current delay.
    #[must_use]
    pub fn staggered(mut self, index: usize, stagger_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms = self.delay_ms.saturating_add(index.saturating_mul(stagger_ms));
        self
    }

    /// CSS classes selecting the keyframes and the timeline.
    #[must_use]
    pub fn class(self, enabled: bool) -> String {
        let effect: &'static str = self.effect.into();
        let trigger: &'static str = self.trigger.into();
        let mut class = format!("reveal reveal--{effect} reveal--{trigger}");
        if !enabled {
            class.push_str(" reveal--static");
        }
        class
    }

    /// Inline timing for the element.
    #[must_use]
    pub fn style(self, default_duration_ms: u32) -> String {
        let duration = self.duration_ms.unwrap_or(default_duration_ms);
        format!("animation-delay: {}ms; animation-duration: {duration}ms;", self.delay_ms)
    }
}

/// Motion settings provided by the host app, or the defaults when none are provided.
#[must_use]
pub fn use_motion() -> MotionConfig {
    try_use_context::<MotionConfig>().unwrap_or_default()
}

/// Wraps its children in an element that plays `motion`.
#[component]
pub fn Reveal(motion: Motion, #[props(into, default)] class: String, children: Element) -> Element {
    let settings = use_motion();
    let mut classes = motion.class(settings.enabled);
    if !class.is_empty() {
        classes.push(' ');
        classes.push_str(&class);
    }
    let style = motion.style(settings.duration_ms);

    rsx! {
        div { class: "{classes}", style: "{style}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_accumulates_on_base_delay() {
        let motion = Motion::in_view(Effect::FadeUp).with_delay(200).staggered(3, 100);
        assert_eq!(motion.delay_ms, 500);

        let first = Motion::in_view(Effect::FadeUp).staggered(0, 100);
        assert_eq!(first.delay_ms, 0);
    }

    #[test]
    fn test_stagger_saturates() {
        let motion = Motion::on_mount(Effect::FadeIn).with_delay(10).staggered(usize::MAX, 1000);
        assert_eq!(motion.delay_ms, u32::MAX);
    }

    #[test]
    fn test_class_names() {
        let motion = Motion::in_view(Effect::ScaleIn);
        assert_eq!(motion.class(true), "reveal reveal--scale-in reveal--in-view");
        assert_eq!(
            Motion::on_mount(Effect::FadeUp).class(false),
            "reveal reveal--fade-up reveal--mount reveal--static"
        );
    }

    #[test]
    fn test_style_uses_fallback_duration() {
        let motion = Motion::on_mount(Effect::FadeIn).with_delay(150);
        assert_eq!(motion.style(600), "animation-delay: 150ms; animation-duration: 600ms;");
        assert_eq!(
            motion.with_duration(900).style(600),
            "animation-delay: 150ms; animation-duration: 900ms;"
        );
    }
}
