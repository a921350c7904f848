//! Browser wiring for hover prefetch.
//!
//! Hydrate-only. Hints are `<link rel="prefetch">` elements appended to
//! `document.head`; removal timers run on `gloo-timers`. The `pointerover`
//! listener is owned by [`HoverPrefetch`] and detached when it drops.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, HtmlAnchorElement};

use super::prefetch::{HINT_REL, HintSink, LinkTarget, Prefetcher, Scheduler, WARM_PATHS};

pub struct DocumentHead {
    document: Document,
}

impl DocumentHead {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl HintSink for DocumentHead {
    type Hint = Element;

    fn insert(&self, href: &str) -> Option<Element> {
        let head = self.document.head()?;
        let link = self.document.create_element("link").ok()?;
        link.set_attribute("rel", HINT_REL).ok()?;
        link.set_attribute("href", href).ok()?;
        head.append_child(&link).ok()?;
        Some(link)
    }

    fn remove(&self, hint: &Element) {
        // ChildNode.remove() is a no-op on a detached node.
        hint.remove();
    }
}

pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

fn anchor_for(event: &Event) -> Option<HtmlAnchorElement> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    element
        .closest("a[href]")
        .ok()
        .flatten()?
        .dyn_into::<HtmlAnchorElement>()
        .ok()
}

/// Document-level hover listener. Dropping it stops new hints; removals
/// already scheduled still fire.
pub struct HoverPrefetch {
    document: Document,
    listener: Closure<dyn FnMut(Event)>,
}

impl HoverPrefetch {
    pub fn attach() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let page_host = window.location().host().ok()?;

        let prefetcher = Prefetcher::new(DocumentHead::new(document.clone()), TimeoutScheduler, page_host);
        let warmed = prefetcher.warm_critical_pages(WARM_PATHS);
        log::debug!("warmed {warmed} critical pages");

        let location = window.location();
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(anchor) = anchor_for(&event) else {
                return;
            };
            // The router changes the location without reloading, so read it per event.
            let Ok(page_href) = location.href() else {
                return;
            };
            let href = anchor.href();
            let host = anchor.host();
            prefetcher.on_pointer_over(Some(LinkTarget { href: &href, host: &host }), &page_href);
        });
        if document
            .add_event_listener_with_callback("pointerover", listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("hover prefetch listener not attached");
            return None;
        }

        Some(Self { document, listener })
    }
}

impl Drop for HoverPrefetch {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("pointerover", self.listener.as_ref().unchecked_ref());
    }
}

thread_local! {
    static INSTALLED: RefCell<Option<HoverPrefetch>> = const { RefCell::new(None) };
}

/// Start hover prefetching for the current document, replacing any earlier
/// installation.
pub fn install_hover_prefetch() {
    let listener = HoverPrefetch::attach();
    let previous = INSTALLED.with(|slot| slot.replace(listener));
    drop(previous);
}

/// Stop hover prefetching.
pub fn uninstall_hover_prefetch() {
    let previous = INSTALLED.with(|slot| slot.borrow_mut().take());
    drop(previous);
}
