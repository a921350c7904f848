//! Pre-paint theme bootstrap emitted into the document head.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle loads after first paint, so the initial resolve/apply has
//! to run as an inline script while the head is parsed. The script is
//! generated from the constants in [`super::theme`] so it and the
//! [`ThemeController`](super::theme::ThemeController) agree on the storage
//! key, class names, media query, and color tokens.

use super::theme::{DARK_SCHEME_QUERY, STORAGE_KEY, Theme, ThemeTokens, VISIBLE_CLASS};

#[cfg(test)]
#[path = "theme_script_test.rs"]
mod theme_script_test;

/// Stylesheet hiding the document until the visibility marker is set.
pub fn gate_style() -> String {
    format!("html:not(.{VISIBLE_CLASS}){{visibility:hidden}}")
}

fn tokens_object(tokens: &ThemeTokens) -> String {
    let fields: Vec<String> = tokens
        .vars()
        .iter()
        .map(|(name, value)| format!("\"{name}\":\"{value}\""))
        .collect();
    format!("{{{}}}", fields.join(","))
}

/// Inline script resolving and applying the theme before first paint.
///
/// Storage access is wrapped so a throwing `localStorage` counts as an unset
/// preference, a missing `matchMedia` counts as light, and the reveal step is
/// always reached after the apply.
pub fn bootstrap_script() -> String {
    let dark = Theme::Dark.as_str();
    let light = Theme::Light.as_str();
    let dark_vars = tokens_object(Theme::Dark.tokens());
    let light_vars = tokens_object(Theme::Light.tokens());
    format!(
        "(function(){{\
var d=document.documentElement,s=null,k=false;\
try{{s=window.localStorage.getItem(\"{STORAGE_KEY}\")}}catch(e){{}}\
try{{k=s?s===\"{dark}\":!!(window.matchMedia&&window.matchMedia(\"{DARK_SCHEME_QUERY}\").matches)}}catch(e){{}}\
var t=k?\"{dark}\":\"{light}\",o=k?\"{light}\":\"{dark}\",v=k?{dark_vars}:{light_vars};\
d.classList.remove(o);d.classList.add(t);\
for(var n in v){{d.style.setProperty(n,v[n])}}\
var r=function(){{d.classList.add(\"{VISIBLE_CLASS}\")}};\
if(window.requestAnimationFrame){{window.requestAnimationFrame(function(){{window.requestAnimationFrame(r)}})}}else{{r()}}\
}})();"
    )
}
