//! Desktop shell of the storefront pages.

use atelier_kernel::domain::config::{AppConfig, MotionConfig};
use atelier_size_guide::STYLESHEET;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use tracing::info;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    motion: MotionConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Window and motion settings taken from the app configuration.
    #[must_use]
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            title: cfg.window.title.clone(),
            width: cfg.window.width,
            height: cfg.window.height,
            motion: cfg.motion,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn motion(&self) -> MotionConfig {
        self.motion
    }

    /// Markup injected into the document head: viewport and the page stylesheet.
    #[must_use]
    pub fn custom_head() -> String {
        format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{STYLESHEET}</style>"#
        )
    }

    /// The entry point for launching the app. Blocks until the window is closed.
    pub fn launch(self, root: fn() -> Element) {
        info!(
            title = %self.title,
            width = self.width,
            height = self.height,
            animated = self.motion.enabled,
            "Launching desktop window"
        );

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(Self::custom_head());

        LaunchBuilder::desktop().with_cfg(cfg).with_context(self.motion).launch(root);
    }
}
