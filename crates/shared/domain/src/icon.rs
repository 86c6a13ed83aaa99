use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Symbolic reference to an outline icon of the storefront icon set.
///
/// The string form is the icon's kebab-case name (e.g. `"arrow-right"`), which is
/// also what renderers expose as `data-icon`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum IconName {
    Ruler,
    Shirt,
    Info,
    Sparkles,
    ArrowRight,
}

impl IconName {
    /// The icon's kebab-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
