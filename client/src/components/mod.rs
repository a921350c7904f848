//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and presentational primitives while
//! reading/writing shared state from Leptos context providers.

pub mod button;
pub mod card;
pub mod sidebar;
pub mod theme_toggle;
