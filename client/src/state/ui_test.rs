use leptos::prelude::*;

use super::*;

#[test]
fn ui_state_default_is_light_closed_english() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_open);
    assert_eq!(state.locale, Locale::En);
    assert_eq!(state.theme(), Theme::Light);
}

#[test]
fn set_theme_tracks_dark_flag() {
    let mut state = UiState::default();
    state.set_theme(Theme::Dark);
    assert!(state.dark_mode);
    assert_eq!(state.theme(), Theme::Dark);
    state.set_theme(Theme::Light);
    assert!(!state.dark_mode);
}

#[test]
fn route_locale_follows_pathname_changes() {
    let path = RwSignal::new(String::from("/programs"));
    let locale = route_locale(Memo::new(move |_| path.get()));
    assert_eq!(locale.get(), Locale::En);

    path.set(String::from("/es/programs"));
    assert_eq!(locale.get(), Locale::Es);

    path.set(String::from("/"));
    assert_eq!(locale.get(), Locale::En);
}
