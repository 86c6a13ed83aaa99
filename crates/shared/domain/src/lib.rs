//! # Domain Models
//!
//! This crate contains pure storefront types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, rendering, or heavy logic—just data, the literal reference
//! datasets and simple lookups over them.

pub mod catalog;
pub mod config;
pub mod icon;

pub use catalog::{DollSize, Measurement, MeasurementTip, SizingNote};
pub use icon::IconName;
