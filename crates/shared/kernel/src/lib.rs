//! Kernel utilities shared across slices and apps.
//! Keep this crate lightweight; it re-exports the domain and hosts configuration loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use atelier_kernel::config::load_config;
//! use atelier_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("desktop")).unwrap_or_default();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use atelier_domain as domain;
