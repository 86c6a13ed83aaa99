//! Static reference data for the size guide.
//!
//! Every collection here is a compile-time literal. Slice order is display order.

use crate::icon::IconName;
use serde::Serialize;

/// A single body measurement of a doll, e.g. `Bust` → `5 in (12.7 cm)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub label: &'static str,
    pub value: &'static str,
}

/// A doll body type the shop sews for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DollSize {
    pub name: &'static str,
    /// Body-part label → dimension, in display order.
    pub measurements: &'static [Measurement],
    pub description: &'static str,
}

impl DollSize {
    /// Returns the dimension recorded for `label`, if any.
    #[must_use]
    pub fn measurement(&self, label: &str) -> Option<&'static str> {
        self.measurements.iter().find(|m| m.label == label).map(|m| m.value)
    }

    /// Kebab-case anchor derived from the name (`"Curvy Fashion Doll"` → `curvy-fashion-doll`).
    #[must_use]
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for ch in self.name.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }
}

/// Instruction on how to measure a physical doll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementTip {
    pub icon: IconName,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizingNote {
    pub title: &'static str,
    pub content: &'static str,
}

const fn m(label: &'static str, value: &'static str) -> Measurement {
    Measurement { label, value }
}

pub const DOLL_SIZES: &[DollSize] = &[
    DollSize {
        name: "Classic Fashion Doll",
        measurements: &[
            m("Height", "11.5 in (29 cm)"),
            m("Bust", "5 in (12.7 cm)"),
            m("Waist", "3.5 in (8.9 cm)"),
            m("Hips", "5 in (12.7 cm)"),
        ],
        description: "The original slim 11.5 inch fashion body. Most of our dresses, tops and \
                      coats are patterned for this size first.",
    },
    DollSize {
        name: "Curvy Fashion Doll",
        measurements: &[
            m("Height", "11.5 in (29 cm)"),
            m("Bust", "5.5 in (14 cm)"),
            m("Waist", "4.25 in (10.8 cm)"),
            m("Hips", "5.75 in (14.6 cm)"),
        ],
        description: "A fuller figure at the same height. Look for the Curvy tag; classic \
                      pieces will not close at the waist.",
    },
    DollSize {
        name: "Petite Fashion Doll",
        measurements: &[
            m("Height", "10.75 in (27.3 cm)"),
            m("Bust", "4.75 in (12 cm)"),
            m("Waist", "3.25 in (8.3 cm)"),
            m("Hips", "4.75 in (12 cm)"),
        ],
        description: "Shorter and narrower than the classic body. Skirts and dresses run \
                      slightly long; knits fit well.",
    },
    DollSize {
        name: "Tall Fashion Doll",
        measurements: &[
            m("Height", "12.25 in (31 cm)"),
            m("Bust", "5 in (12.7 cm)"),
            m("Waist", "3.5 in (8.9 cm)"),
            m("Hips", "5 in (12.7 cm)"),
        ],
        description: "Classic proportions with a longer torso and legs. Tops fit, trousers \
                      and jumpsuits need the Tall cut.",
    },
    DollSize {
        name: "18-inch Play Doll",
        measurements: &[
            m("Height", "18 in (46 cm)"),
            m("Chest", "12 in (30.5 cm)"),
            m("Waist", "11 in (28 cm)"),
            m("Hips", "12.5 in (31.8 cm)"),
            m("Head", "12.5 in (31.8 cm)"),
        ],
        description: "Soft-bodied play dolls with vinyl limbs. Openings are sized generously \
                      so clothes slip over the head and hands.",
    },
    DollSize {
        name: "14-inch Friend Doll",
        measurements: &[
            m("Height", "14 in (35.5 cm)"),
            m("Chest", "7.5 in (19 cm)"),
            m("Waist", "7 in (17.8 cm)"),
            m("Hips", "8 in (20.3 cm)"),
        ],
        description: "Slim all-vinyl dolls with a child-like figure. Ideal for our smock \
                      dresses and pinafores.",
    },
];

pub const MEASUREMENT_TIPS: &[MeasurementTip] = &[
    MeasurementTip {
        icon: IconName::Ruler,
        title: "Use a Flexible Tape",
        description: "A soft sewing tape measure follows every curve of the body. Rigid rulers \
                      under-measure bust and hips.",
    },
    MeasurementTip {
        icon: IconName::Shirt,
        title: "Measure Undressed",
        description: "Remove all clothing and accessories first. Even thin factory outfits \
                      add a few millimetres.",
    },
    MeasurementTip {
        icon: IconName::Info,
        title: "Measure the Fullest Point",
        description: "Wrap the tape around the widest part of the bust and hips and the \
                      narrowest part of the waist, keeping it level.",
    },
];

pub const SIZING_NOTES: &[SizingNote] = &[
    SizingNote {
        title: "Between Two Sizes?",
        content: "Choose the larger size. A slightly loose fit can be taken in with a stitch, \
                  a tight one cannot be let out.",
    },
    SizingNote {
        title: "Vintage and Reproduction Dolls",
        content: "Older bodies vary between production years. Compare your measurements with \
                  the chart rather than relying on the name on the box.",
    },
    SizingNote {
        title: "Fabric Stretch",
        content: "Knit pieces stretch up to half an inch; woven cotton and satin pieces do \
                  not stretch at all.",
    },
];

#[must_use]
pub const fn doll_sizes() -> &'static [DollSize] {
    DOLL_SIZES
}

#[must_use]
pub const fn measurement_tips() -> &'static [MeasurementTip] {
    MEASUREMENT_TIPS
}

#[must_use]
pub const fn sizing_notes() -> &'static [SizingNote] {
    SIZING_NOTES
}

/// Looks up a doll size by its exact display name.
#[must_use]
pub fn find_doll_size(name: &str) -> Option<&'static DollSize> {
    DOLL_SIZES.iter().find(|size| size.name == name)
}
