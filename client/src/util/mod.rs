//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. The `*_dom` modules hold the web-sys side and only exist in the
//! hydrate build.

pub mod i18n;
pub mod prefetch;
#[cfg(feature = "hydrate")]
pub mod prefetch_dom;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod theme_dom;
pub mod theme_script;
