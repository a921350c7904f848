//! Browser implementations of the theme seams and trigger wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only. `localStorage`, `matchMedia`, and `document.documentElement`
//! back the [`ThemeController`] seams; [`ThemeSync`] owns the OS-scheme and
//! cross-tab listeners for the lifetime of the mounted app.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, HtmlElement, MediaQueryList, Storage, StorageEvent, Window};

use super::theme::{
    ColorSchemeSource, DARK_SCHEME_QUERY, PreferenceStore, StorageError, Theme, ThemeController, ThemeRoot,
    VISIBLE_CLASS,
};

pub type BrowserThemeController = ThemeController<LocalStorage, MediaQuery, DocumentRoot>;

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`, absent when disabled or blocked.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new(window: &Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Read(js_error_text(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_error_text(&e)))
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
pub struct MediaQuery {
    list: Option<MediaQueryList>,
}

impl MediaQuery {
    pub fn new(window: &Window) -> Self {
        Self { list: window.match_media(DARK_SCHEME_QUERY).ok().flatten() }
    }
}

impl ColorSchemeSource for MediaQuery {
    fn prefers_dark(&self) -> bool {
        self.list.as_ref().map_or(false, MediaQueryList::matches)
    }
}

/// `document.documentElement`.
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

fn mark_visible(element: &Element) {
    let _ = element.class_list().add_1(VISIBLE_CLASS);
}

impl ThemeRoot for DocumentRoot {
    fn set_theme_class(&self, theme: Theme) {
        let classes = self.element.class_list();
        let _ = classes.remove_1(theme.opposite().class_name());
        let _ = classes.add_1(theme.class_name());
    }

    fn set_style_var(&self, name: &str, value: &str) {
        if let Some(el) = self.element.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(name, value);
        }
    }

    fn current_theme(&self) -> Option<Theme> {
        let classes = self.element.class_list();
        if classes.contains(Theme::Dark.class_name()) {
            Some(Theme::Dark)
        } else if classes.contains(Theme::Light.class_name()) {
            Some(Theme::Light)
        } else {
            None
        }
    }

    /// Add the visibility marker two animation frames from now, so the
    /// themed styles are committed before the first visible paint.
    fn reveal(&self) {
        let element = self.element.clone();
        let Some(window) = web_sys::window() else {
            mark_visible(&element);
            return;
        };

        let second_window = window.clone();
        let frame_element = element.clone();
        let first = Closure::once_into_js(move |_ts: f64| {
            let fallback = frame_element.clone();
            let second = Closure::once_into_js(move |_ts: f64| mark_visible(&frame_element));
            if second_window
                .request_animation_frame(second.unchecked_ref())
                .is_err()
            {
                mark_visible(&fallback);
            }
        });

        if window.request_animation_frame(first.unchecked_ref()).is_err() {
            mark_visible(&element);
        }
    }
}

/// Controller bound to the current window, or `None` outside a document.
pub fn browser_controller() -> Option<BrowserThemeController> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    Some(ThemeController::new(LocalStorage::new(&window), MediaQuery::new(&window), DocumentRoot::new(root)))
}

/// Run the initial synchronization and reveal the document.
///
/// The inline bootstrap script normally did this already; repeating it is
/// idempotent and covers documents served without the script.
pub fn boot_document_theme() -> Option<Theme> {
    browser_controller().map(|controller| controller.boot())
}

/// Resynchronize after an in-app navigation.
pub fn sync_document_theme() -> Option<Theme> {
    browser_controller().map(|controller| controller.on_navigation())
}

/// OS-scheme and cross-tab storage listeners. Both are removed on drop.
pub struct ThemeSync {
    window: Window,
    media: Option<MediaQueryList>,
    on_scheme: Closure<dyn FnMut(web_sys::Event)>,
    on_storage: Closure<dyn FnMut(StorageEvent)>,
}

impl ThemeSync {
    /// Attach both listeners. `on_change` receives every theme they re-apply.
    pub fn attach(on_change: Rc<dyn Fn(Theme)>) -> Option<Self> {
        let window = web_sys::window()?;
        let controller = Rc::new(browser_controller()?);

        let media = window.match_media(DARK_SCHEME_QUERY).ok().flatten();
        let scheme_controller = Rc::clone(&controller);
        let scheme_changed = Rc::clone(&on_change);
        let on_scheme = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let theme = scheme_controller.on_color_scheme_change();
            log::debug!("os color scheme changed, theme now {}", theme.as_str());
            scheme_changed(theme);
        });
        if let Some(list) = &media {
            if let Err(e) = list.add_event_listener_with_callback("change", on_scheme.as_ref().unchecked_ref()) {
                log::warn!("color scheme listener not attached: {}", js_error_text(&e));
            }
        }

        let on_storage = Closure::<dyn FnMut(StorageEvent)>::new(move |event: StorageEvent| {
            if let Some(theme) = controller.on_storage_change(event.key().as_deref()) {
                log::debug!("theme changed in another tab, now {}", theme.as_str());
                on_change(theme);
            }
        });
        if let Err(e) = window.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref()) {
            log::warn!("storage listener not attached: {}", js_error_text(&e));
        }

        Some(Self { window, media, on_scheme, on_storage })
    }
}

impl Drop for ThemeSync {
    fn drop(&mut self) {
        if let Some(list) = &self.media {
            let _ = list.remove_event_listener_with_callback("change", self.on_scheme.as_ref().unchecked_ref());
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("storage", self.on_storage.as_ref().unchecked_ref());
    }
}

thread_local! {
    static INSTALLED: RefCell<Option<ThemeSync>> = const { RefCell::new(None) };
}

/// Attach the page-wide listeners, replacing any earlier installation.
pub fn install_theme_sync(on_change: impl Fn(Theme) + 'static) {
    let sync = ThemeSync::attach(Rc::new(on_change));
    let previous = INSTALLED.with(|slot| slot.replace(sync));
    drop(previous);
}

/// Detach the page-wide listeners.
pub fn uninstall_theme_sync() {
    let previous = INSTALLED.with(|slot| slot.borrow_mut().take());
    drop(previous);
}
