//! Hover-triggered prefetch hints for in-app links.
//!
//! SYSTEM CONTEXT
//! ==============
//! When the pointer moves over a same-origin anchor, a prefetch hint for its
//! URL is added to the document head and removed again after
//! [`HINT_LIFETIME_MS`]. A small fixed set of pages is warmed once at start-up
//! and kept.
//!
//! TRADE-OFFS
//! ==========
//! Purely an optimization: duplicate hints for a re-hovered link are allowed
//! (the removal timer bounds how many accumulate), removal timers are never
//! cancelled, and every insert/remove failure is swallowed.

use std::rc::Rc;

#[cfg(test)]
#[path = "prefetch_test.rs"]
mod prefetch_test;

/// How long a hover hint stays in the head.
pub const HINT_LIFETIME_MS: u32 = 5_000;

/// Pages warmed unconditionally at start-up.
pub const WARM_PATHS: &[&str] = &["/", "/programs"];

/// Resource hint relation written on inserted link elements.
pub const HINT_REL: &str = "prefetch";

/// The nearest anchor under a hovered node, as seen by the DOM layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkTarget<'a> {
    /// Absolute URL the anchor points at.
    pub href: &'a str,
    /// `host` of that URL (hostname plus non-default port).
    pub host: &'a str,
}

/// Where hints live. Removing a hint that is already gone must be a no-op.
pub trait HintSink {
    type Hint: 'static;

    fn insert(&self, href: &str) -> Option<Self::Hint>;
    fn remove(&self, hint: &Self::Hint);
}

/// Deferred task runner on the host event loop.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// `url` with any `#fragment` removed.
pub fn strip_fragment(url: &str) -> &str {
    url.split_once('#').map_or(url, |(document, _)| document)
}

/// Whether `link` is worth prefetching from the page at `page_href`, served
/// from `page_host`.
///
/// Cross-origin links are skipped, as are links that resolve to the current
/// document (`#top` resolves to `page_href` plus a fragment).
pub fn should_prefetch(link: LinkTarget<'_>, page_host: &str, page_href: &str) -> bool {
    if link.href.is_empty() || link.href.starts_with('#') {
        return false;
    }
    if link.host.is_empty() || !link.host.eq_ignore_ascii_case(page_host) {
        return false;
    }
    strip_fragment(link.href) != strip_fragment(page_href)
}

pub struct Prefetcher<H, S> {
    sink: Rc<H>,
    scheduler: S,
    page_host: String,
}

impl<H, S> Prefetcher<H, S>
where
    H: HintSink + 'static,
    S: Scheduler,
{
    pub fn new(sink: H, scheduler: S, page_host: impl Into<String>) -> Self {
        Self { sink: Rc::new(sink), scheduler, page_host: page_host.into() }
    }

    pub fn sink(&self) -> &H {
        &self.sink
    }

    /// Handle a pointer-over event resolved to its nearest anchor, if any,
    /// while the document at `page_href` is showing.
    ///
    /// Returns `true` when a hint was inserted.
    pub fn on_pointer_over(&self, link: Option<LinkTarget<'_>>, page_href: &str) -> bool {
        let Some(link) = link else {
            return false;
        };
        if !should_prefetch(link, &self.page_host, page_href) {
            return false;
        }
        let Some(hint) = self.sink.insert(link.href) else {
            log::debug!("prefetch hint for {} not inserted", link.href);
            return false;
        };

        let sink = Rc::clone(&self.sink);
        self.scheduler
            .schedule(HINT_LIFETIME_MS, Box::new(move || sink.remove(&hint)));
        true
    }

    /// Insert permanent hints for `paths`. Returns how many were inserted.
    pub fn warm_critical_pages(&self, paths: &[&str]) -> usize {
        paths
            .iter()
            .filter(|path| self.sink.insert(path).is_some())
            .count()
    }
}
