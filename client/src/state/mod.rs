//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only presentation chrome is reactive state here; theme and prefetch state
//! live in the browser (root class list, storage, head) and are reached
//! through `util`.

pub mod ui;
