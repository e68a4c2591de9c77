//! Section-visibility tracking: decides which page region is "active"
//! as the user scrolls, to drive the navigation highlight.
//!
//! The decision logic lives in [`SectionTracker`], a pure policy struct:
//! feed it observation batches, it tells you when the active section
//! changes. The browser side ([`SectionSpy`]) wires it to a native
//! IntersectionObserver whose window is inset by the fixed nav bar
//! height, so a region hidden behind the bar does not count as visible.
//!
//! ## Activation policy
//!
//! A region qualifies when at least 40% of it is inside the observation
//! window. Within one batch, the topmost qualifying region wins; two
//! regions reporting the same top edge fall back to page order. When
//! nothing in a batch qualifies, the previous active section is kept,
//! so scrolling through a tall gap never blanks the highlight. This
//! replaces the accidental last-callback-wins order a naive observer
//! handler exhibits with a rule that is deterministic under batched
//! delivery.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::content::Section;

/// Minimum proportion of a region that must be visible to qualify.
pub const ACTIVE_RATIO_THRESHOLD: f64 = 0.4;

/// Height of the fixed nav bar; the observation window's top edge is
/// inset by this much.
pub const NAV_CLEARANCE_PX: u32 = 80;

/// One region's state as delivered by an observation batch.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    pub section: Section,
    /// Proportion of the region inside the observation window, 0.0 to 1.0.
    pub ratio: f64,
    /// Top edge of the region's bounding rect in viewport coordinates.
    pub top: f64,
}

/// Pure activation policy. Owns nothing but the current answer.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    threshold: f64,
    active: Section,
}

impl SectionTracker {
    pub fn new(initial: Section) -> Self {
        SectionTracker::with_threshold(initial, ACTIVE_RATIO_THRESHOLD)
    }

    pub fn with_threshold(initial: Section, threshold: f64) -> Self {
        SectionTracker { threshold, active: initial }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Feed one batch of observations. Returns the new active section
    /// when the batch changes it, `None` otherwise.
    ///
    /// Qualifying means `ratio >= threshold`; among qualifiers the one
    /// with the smallest `top` wins, and an exact `top` tie falls back
    /// to page order. Batches contain only regions whose visibility
    /// changed, so an absent region never loses its active status to a
    /// sub-threshold entry.
    pub fn observe(&mut self, batch: &[Observation]) -> Option<Section> {
        let winner = batch
            .iter()
            .filter(|obs| obs.ratio >= self.threshold)
            .min_by(|a, b| {
                a.top
                    .total_cmp(&b.top)
                    .then_with(|| a.section.cmp(&b.section))
            })?;
        if winner.section == self.active {
            return None;
        }
        self.active = winner.section;
        Some(self.active)
    }
}

// =========================================================================
// Browser adapters
// =========================================================================

/// The root margin string that carves the nav bar out of the viewport.
fn top_inset_margin() -> String {
    format!("-{NAV_CLEARANCE_PX}px 0px 0px 0px")
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches all five section elements and reports active-section changes.
///
/// Dropping the spy disconnects the observer, releasing every
/// observation handle along with the callback.
pub struct SectionSpy {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl SectionSpy {
    /// Observe every section element currently in the document.
    /// `on_active` fires once per active-section change, never for
    /// batches that leave the answer alone.
    pub fn install(on_active: impl Fn(Section) + 'static) -> Result<SectionSpy, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document to observe"))?;

        let tracker = Rc::new(RefCell::new(SectionTracker::new(Section::Home)));
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<Observation> = entries
                    .iter()
                    .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                    .filter_map(|entry| {
                        let section = Section::from_id(&entry.target().id())?;
                        Some(Observation {
                            section,
                            ratio: entry.intersection_ratio(),
                            top: entry.bounding_client_rect().top(),
                        })
                    })
                    .collect();
                if let Some(active) = tracker.borrow_mut().observe(&batch) {
                    log::debug!("active section -> {}", active.id());
                    on_active(active);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(ACTIVE_RATIO_THRESHOLD));
        options.set_root_margin(&top_inset_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for section in Section::ALL {
            if let Some(element) = document.get_element_by_id(section.id()) {
                observer.observe(&element);
            }
        }

        Ok(SectionSpy { observer, _callback: callback })
    }
}

impl Drop for SectionSpy {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Fires once when an element first becomes substantially visible, then
/// stops watching it. Drives the skills-bar reveal in the about section.
pub struct RevealOnce {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealOnce {
    pub fn install(element_id: &str, on_visible: impl Fn() + 'static) -> Result<RevealOnce, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document to observe"))?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| JsValue::from_str("reveal target missing"))?;

        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries
                    .iter()
                    .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                {
                    if entry.is_intersecting() {
                        on_visible();
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(ACTIVE_RATIO_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&element);

        Ok(RevealOnce { observer, _callback: callback })
    }
}

impl Drop for RevealOnce {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// =========================================================================
// Tests
// =========================================================================
