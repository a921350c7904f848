//! Locale detection and UI string tables.
//!
//! The locale is carried by the first path segment (`/es/programs`); paths
//! without a known prefix use the default locale.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    /// Locale named by the first segment of `path`, or the default.
    pub fn from_path(path: &str) -> Self {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(Self::from_code)
            .unwrap_or_default()
    }

    /// Strip a locale prefix from `path`, returning the site-relative path.
    pub fn strip_prefix(path: &str) -> &str {
        let trimmed = path.trim_start_matches('/');
        let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));
        if Self::from_code(first).is_none() {
            return path;
        }
        if rest.is_empty() {
            "/"
        } else {
            &path[path.len() - rest.len() - 1..]
        }
    }

    /// Prefix a site-relative `path` for this locale. The default locale is
    /// served unprefixed.
    pub fn localize_path(self, path: &str) -> String {
        let base = Self::strip_prefix(path);
        if self == Self::default() {
            return base.to_owned();
        }
        if base == "/" {
            format!("/{}", self.code())
        } else {
            format!("/{}{base}", self.code())
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Es => &ES,
        }
    }
}

/// Chrome strings for one locale.
#[derive(Debug)]
pub struct Messages {
    pub site_title: &'static str,
    pub nav_label: &'static str,
    pub nav_home: &'static str,
    pub nav_programs: &'static str,
    pub toggle_sidebar: &'static str,
    pub switch_to_dark: &'static str,
    pub switch_to_light: &'static str,
    pub home_heading: &'static str,
    pub home_lead: &'static str,
    pub programs_heading: &'static str,
    pub programs_lead: &'static str,
    pub view_program: &'static str,
    pub certification: &'static str,
    pub certifications: &'static str,
    pub not_found: &'static str,
}

impl Messages {
    /// "5 certifications", with the noun matched to `count`.
    pub fn certification_count(&self, count: usize) -> String {
        let noun = if count == 1 { self.certification } else { self.certifications };
        format!("{count} {noun}")
    }
}

static EN: Messages = Messages {
    site_title: "Certification Showcase",
    nav_label: "Main navigation",
    nav_home: "Home",
    nav_programs: "Achievement programs",
    toggle_sidebar: "Toggle navigation",
    switch_to_dark: "Switch to dark theme",
    switch_to_light: "Switch to light theme",
    home_heading: "Certifications, earned and shown",
    home_lead: "Badge tracks that recognize holders of a full set of cloud native certifications.",
    programs_heading: "Achievement programs",
    programs_lead: "Each program is earned by holding every certification in its track at the same time.",
    view_program: "View program",
    certification: "certification",
    certifications: "certifications",
    not_found: "Page not found.",
};

static ES: Messages = Messages {
    site_title: "Vitrina de certificaciones",
    nav_label: "Navegación principal",
    nav_home: "Inicio",
    nav_programs: "Programas de logros",
    toggle_sidebar: "Mostrar u ocultar navegación",
    switch_to_dark: "Cambiar a tema oscuro",
    switch_to_light: "Cambiar a tema claro",
    home_heading: "Certificaciones, obtenidas y mostradas",
    home_lead: "Insignias que reconocen a quienes tienen el conjunto completo de certificaciones cloud native.",
    programs_heading: "Programas de logros",
    programs_lead: "Cada programa se obtiene al tener vigentes todas las certificaciones de su itinerario.",
    view_program: "Ver programa",
    certification: "certificación",
    certifications: "certificaciones",
    not_found: "Página no encontrada.",
};
