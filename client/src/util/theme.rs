//! Light/dark theme resolution, application, and toggle.
//!
//! Reads the explicit preference from persistent storage under [`STORAGE_KEY`],
//! falls back to the OS color-scheme signal when it is unset, and writes the
//! result to the root element as a `light`/`dark` class plus five themed CSS
//! custom properties.
//!
//! DESIGN
//! ======
//! The controller holds no theme state between triggers. Every trigger
//! (boot, in-app navigation, OS scheme change, storage change in another tab)
//! re-reads storage and the OS signal and applies the result, so a cached
//! value can never go stale. Browser access goes through three small seams
//! ([`PreferenceStore`], [`ColorSchemeSource`], [`ThemeRoot`]) so the
//! decision logic runs unchanged against in-memory fakes in tests.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: read failures degrade to "unset" and write
//! failures still apply the new theme for the current page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the explicit preference (`"dark"` / `"light"`).
pub const STORAGE_KEY: &str = "theme";

/// Class added to the root element once the theme has been applied.
pub const VISIBLE_CLASS: &str = "visible";

/// Media query reporting the OS dark color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Effective presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value persisted to storage and used as the root class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn class_name(self) -> &'static str {
        self.as_str()
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    /// Color tokens associated with this theme.
    pub fn tokens(self) -> &'static ThemeTokens {
        match self {
            Self::Light => &LIGHT_TOKENS,
            Self::Dark => &DARK_TOKENS,
        }
    }
}

/// Explicit user preference as stored, or its absence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Interpret a raw stored value.
    ///
    /// `"dark"` is dark, any other non-empty string is light, and a missing
    /// or empty value defers to the OS.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            Some(value) if !value.is_empty() => Self::Light,
            _ => Self::Unset,
        }
    }

    pub fn resolve(self, os_prefers_dark: bool) -> Theme {
        match self {
            Self::Dark => Theme::Dark,
            Self::Light => Theme::Light,
            Self::Unset => Theme::from_dark(os_prefers_dark),
        }
    }
}

/// Themed custom property values applied to the root element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    pub bg_primary: &'static str,
    pub text_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub border: &'static str,
}

pub const DARK_TOKENS: ThemeTokens = ThemeTokens {
    bg_primary: "#0a0b1e",
    text_primary: "#f8fafc",
    bg_secondary: "#141328",
    bg_tertiary: "#1e1b3a",
    border: "#334155",
};

pub const LIGHT_TOKENS: ThemeTokens = ThemeTokens {
    bg_primary: "#fff",
    text_primary: "#111827",
    bg_secondary: "#f8fafc",
    bg_tertiary: "#f1f5f9",
    border: "#e5e7eb",
};

impl ThemeTokens {
    /// `(custom property, value)` pairs in application order.
    pub fn vars(&self) -> [(&'static str, &'static str); 5] {
        [
            ("--bg-primary", self.bg_primary),
            ("--text-primary", self.text_primary),
            ("--bg-secondary", self.bg_secondary),
            ("--bg-tertiary", self.bg_tertiary),
            ("--border-color", self.border),
        ]
    }
}

/// Failure reading or writing the preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Persistent per-origin key-value storage.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is disabled or the read throws.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is disabled or the write throws
    /// (quota, privacy mode).
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// OS-reported color-scheme preference.
pub trait ColorSchemeSource {
    /// `true` when the OS prefers dark. Unavailable sources report `false`.
    fn prefers_dark(&self) -> bool;
}

/// The document root that carries theme state.
pub trait ThemeRoot {
    /// Leave exactly one of `light`/`dark` in the root class set.
    fn set_theme_class(&self, theme: Theme);
    fn set_style_var(&self, name: &str, value: &str);
    /// Theme currently carried by the root, if any.
    fn current_theme(&self) -> Option<Theme>;
    /// Mark the document ready to display.
    fn reveal(&self);
}

/// Resolves and applies the derived theme against injected browser seams.
pub struct ThemeController<S, M, R> {
    store: S,
    scheme: M,
    root: R,
}

impl<S, M, R> ThemeController<S, M, R>
where
    S: PreferenceStore,
    M: ColorSchemeSource,
    R: ThemeRoot,
{
    pub fn new(store: S, scheme: M, root: R) -> Self {
        Self { store, scheme, root }
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    /// Stored preference, with storage failures treated as unset.
    pub fn preference(&self) -> ThemePreference {
        match self.store.read(STORAGE_KEY) {
            Ok(raw) => ThemePreference::parse(raw.as_deref()),
            Err(e) => {
                log::warn!("theme preference unreadable, deferring to OS: {e}");
                ThemePreference::Unset
            }
        }
    }

    /// Compute the derived theme from current storage and OS state.
    pub fn resolve(&self) -> Theme {
        self.preference().resolve(self.scheme.prefers_dark())
    }

    /// Write `theme` to the root class set and custom properties.
    pub fn apply(&self, theme: Theme) {
        self.root.set_theme_class(theme);
        for (name, value) in theme.tokens().vars() {
            self.root.set_style_var(name, value);
        }
    }

    /// Resolve then apply. Every synchronization trigger goes through here.
    pub fn sync(&self) -> Theme {
        let theme = self.resolve();
        self.apply(theme);
        theme
    }

    /// Initial synchronization followed by the reveal.
    ///
    /// The root is only revealed after an apply has run.
    pub fn boot(&self) -> Theme {
        let theme = self.sync();
        self.root.reveal();
        log::debug!("theme booted as {}", theme.as_str());
        theme
    }

    /// Flip the applied theme and persist it as the explicit preference.
    pub fn toggle(&self) -> Theme {
        let current = self.root.current_theme().unwrap_or_else(|| self.resolve());
        let next = current.opposite();
        if let Err(e) = self.store.write(STORAGE_KEY, next.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
        self.apply(next);
        next
    }

    /// Handle a storage event from another tab.
    ///
    /// `key` is `None` when the other tab cleared storage entirely. Returns
    /// the re-applied theme, or `None` when the event concerned another key.
    pub fn on_storage_change(&self, key: Option<&str>) -> Option<Theme> {
        match key {
            None => Some(self.sync()),
            Some(k) if k == STORAGE_KEY => Some(self.sync()),
            Some(_) => None,
        }
    }

    /// Handle an OS color-scheme change.
    pub fn on_color_scheme_change(&self) -> Theme {
        self.sync()
    }

    /// Handle completion of an in-app page transition.
    pub fn on_navigation(&self) -> Theme {
        self.sync()
    }
}

/// Toggle the running document's theme and persist the new preference.
///
/// Returns the newly applied theme; without a browser the flip is computed
/// from `current` only.
pub fn toggle_document_theme(current: Theme) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        match super::theme_dom::browser_controller() {
            Some(controller) => controller.toggle(),
            None => current.opposite(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        current.opposite()
    }
}
