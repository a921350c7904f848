//! Local UI chrome state (theme indicator, sidebar, locale).
//!
//! DESIGN
//! ======
//! `dark_mode` mirrors what the theme controller last applied to the root
//! element so toggles can render the right affordance; the root class list
//! stays the source of truth.
//!
//! `locale` follows the route from the layout effect, which runs after the
//! routed page renders; pages read [`route_locale`] instead so their first
//! render already matches the URL.

use leptos::prelude::*;

use crate::util::i18n::Locale;
use crate::util::theme::Theme;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme indicator, navigation chrome, and locale.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub locale: Locale,
}

impl UiState {
    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark_mode)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.dark_mode = theme.is_dark();
    }
}

/// Locale named by the current route, recomputed on every navigation.
pub fn route_locale(pathname: Memo<String>) -> Memo<Locale> {
    Memo::new(move |_| pathname.with(|path| Locale::from_path(path)))
}
