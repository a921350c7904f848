//! Routed screens: the landing page and the achievement program listing.
//!
//! Both are mounted once per locale prefix and read their locale from the
//! current route.

pub mod home;
pub mod programs;
