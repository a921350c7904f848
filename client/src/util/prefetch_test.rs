use std::cell::{Cell, RefCell};

use super::*;

// =============================================================
// Fakes
// =============================================================

#[derive(Default)]
struct RecordingHead {
    hints: RefCell<Vec<(u32, String)>>,
    next_id: Cell<u32>,
    removals: Cell<usize>,
}

impl RecordingHead {
    fn hrefs(&self) -> Vec<String> {
        self.hints.borrow().iter().map(|(_, href)| href.clone()).collect()
    }
}

impl HintSink for RecordingHead {
    type Hint = u32;

    fn insert(&self, href: &str) -> Option<u32> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.hints.borrow_mut().push((id, href.to_owned()));
        Some(id)
    }

    fn remove(&self, hint: &u32) {
        self.removals.set(self.removals.get() + 1);
        self.hints.borrow_mut().retain(|(id, _)| id != hint);
    }
}

/// Simulated event-loop clock.
#[derive(Clone, Default)]
struct ManualClock {
    now: Rc<Cell<u64>>,
    tasks: Rc<RefCell<Vec<(u64, Box<dyn FnOnce()>)>>>,
}

impl ManualClock {
    fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        self.now.set(target);
        let due: Vec<Box<dyn FnOnce()>> = {
            let mut tasks = self.tasks.borrow_mut();
            let (due, pending): (Vec<_>, Vec<_>) = tasks.drain(..).partition(|(at, _)| *at <= target);
            *tasks = pending;
            due.into_iter().map(|(_, task)| task).collect()
        };
        for task in due {
            task();
        }
    }

    fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Scheduler for ManualClock {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let at = self.now.get() + u64::from(delay_ms);
        self.tasks.borrow_mut().push((at, task));
    }
}

const HOST: &str = "certs.example.dev";
const PAGE: &str = "https://certs.example.dev/about";

fn prefetcher() -> (Prefetcher<RecordingHead, ManualClock>, ManualClock) {
    let clock = ManualClock::default();
    (Prefetcher::new(RecordingHead::default(), clock.clone(), HOST), clock)
}

fn same_origin(href: &str) -> LinkTarget<'_> {
    LinkTarget { href, host: HOST }
}

// =============================================================
// Origin filtering
// =============================================================

#[test]
fn should_prefetch_requires_matching_host() {
    assert!(should_prefetch(same_origin("https://certs.example.dev/programs"), HOST, PAGE));
    assert!(should_prefetch(LinkTarget { href: "https://CERTS.example.dev/", host: "CERTS.example.dev" }, HOST, PAGE));
    assert!(!should_prefetch(LinkTarget { href: "https://cncf.io/", host: "cncf.io" }, HOST, PAGE));
    assert!(!should_prefetch(LinkTarget { href: "https://certs.example.dev:8443/", host: "certs.example.dev:8443" }, HOST, PAGE));
}

#[test]
fn should_prefetch_skips_empty_and_fragment_links() {
    assert!(!should_prefetch(same_origin(""), HOST, PAGE));
    assert!(!should_prefetch(same_origin("#top"), HOST, PAGE));
    assert!(!should_prefetch(LinkTarget { href: "mailto:team@example.dev", host: "" }, HOST, PAGE));
}

#[test]
fn should_prefetch_skips_resolved_links_to_current_document() {
    let page = "https://certs.example.dev/programs";
    assert!(!should_prefetch(same_origin("https://certs.example.dev/programs#top"), HOST, page));
    assert!(!should_prefetch(same_origin("https://certs.example.dev/programs#"), HOST, page));
    assert!(!should_prefetch(same_origin("https://certs.example.dev/programs"), HOST, "https://certs.example.dev/programs#kubestronaut"));
    assert!(should_prefetch(same_origin("https://certs.example.dev/programs#top"), HOST, "https://certs.example.dev/"));
}

#[test]
fn strip_fragment_keeps_document_part() {
    assert_eq!(strip_fragment("https://certs.example.dev/programs#top"), "https://certs.example.dev/programs");
    assert_eq!(strip_fragment("https://certs.example.dev/"), "https://certs.example.dev/");
}

// =============================================================
// Hover hints
// =============================================================

#[test]
fn hovering_same_origin_link_inserts_one_hint_then_expires() {
    let (prefetcher, clock) = prefetcher();
    assert!(prefetcher.on_pointer_over(Some(same_origin("https://certs.example.dev/programs")), PAGE));
    assert_eq!(prefetcher.sink().hrefs(), ["https://certs.example.dev/programs"]);

    clock.advance(u64::from(HINT_LIFETIME_MS) - 1);
    assert_eq!(prefetcher.sink().hrefs().len(), 1);

    clock.advance(1);
    assert!(prefetcher.sink().hrefs().is_empty());
}

#[test]
fn hovering_cross_origin_link_inserts_nothing() {
    let (prefetcher, clock) = prefetcher();
    let link = LinkTarget { href: "https://www.cncf.io/training/kubestronaut/", host: "www.cncf.io" };
    assert!(!prefetcher.on_pointer_over(Some(link), PAGE));
    assert!(prefetcher.sink().hrefs().is_empty());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn hovering_resolved_fragment_link_on_same_page_inserts_nothing() {
    let (prefetcher, clock) = prefetcher();
    let link = same_origin("https://certs.example.dev/programs#top");
    assert!(!prefetcher.on_pointer_over(Some(link), "https://certs.example.dev/programs"));
    assert!(prefetcher.sink().hrefs().is_empty());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn hovering_non_link_inserts_nothing() {
    let (prefetcher, _clock) = prefetcher();
    assert!(!prefetcher.on_pointer_over(None, PAGE));
    assert!(prefetcher.sink().hrefs().is_empty());
}

#[test]
fn rehover_adds_duplicate_hint_and_each_expires_on_its_own_timer() {
    let (prefetcher, clock) = prefetcher();
    let href = "https://certs.example.dev/";
    prefetcher.on_pointer_over(Some(same_origin(href)), PAGE);
    clock.advance(2_000);
    prefetcher.on_pointer_over(Some(same_origin(href)), PAGE);
    assert_eq!(prefetcher.sink().hrefs().len(), 2);

    clock.advance(3_000);
    assert_eq!(prefetcher.sink().hrefs().len(), 1);

    clock.advance(2_000);
    assert!(prefetcher.sink().hrefs().is_empty());
    assert_eq!(prefetcher.sink().removals.get(), 2);
}

#[test]
fn removal_of_already_removed_hint_is_tolerated() {
    let (prefetcher, clock) = prefetcher();
    prefetcher.on_pointer_over(Some(same_origin("https://certs.example.dev/programs")), PAGE);
    prefetcher.sink().hints.borrow_mut().clear();
    clock.advance(u64::from(HINT_LIFETIME_MS));
    assert_eq!(prefetcher.sink().removals.get(), 1);
    assert!(prefetcher.sink().hrefs().is_empty());
}

// =============================================================
// Warm-up
// =============================================================

#[test]
fn warm_critical_pages_inserts_permanent_hints() {
    let (prefetcher, clock) = prefetcher();
    assert_eq!(prefetcher.warm_critical_pages(WARM_PATHS), WARM_PATHS.len());
    assert_eq!(clock.pending(), 0);

    clock.advance(60_000);
    assert_eq!(prefetcher.sink().hrefs(), WARM_PATHS);
}
