//! Smooth-scroll navigation and the scrolled-nav flag.
//!
//! Link activation never performs the browser's default anchor jump; it
//! is suppressed at the event and the scroll is requested here instead,
//! animated. A second, cosmetic concern lives alongside it: a window
//! scroll listener that reports when the viewport has moved past the
//! fold offset, so the nav bar can switch to its opaque treatment.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::Section;

/// Scroll offset past which the nav bar switches to its opaque style.
pub const SCROLLED_NAV_OFFSET_PX: f64 = 50.0;

/// Whether a vertical scroll position is past the fold offset.
pub fn past_fold(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_NAV_OFFSET_PX
}

/// Animated-scroll the viewport to `section`'s region.
///
/// A missing element (stale id, detached node) is a silent no-op: no
/// scroll, no error raised.
pub fn scroll_to(section: Section) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(section.id()) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Window scroll listener feeding the past-the-fold flag.
///
/// Reports only changes, not every scroll event. Dropping the watch
/// removes the listener.
pub struct ScrollWatch {
    callback: Closure<dyn FnMut()>,
}

impl ScrollWatch {
    pub fn install(on_change: impl Fn(bool) + 'static) -> Option<ScrollWatch> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new({
            let window = window.clone();
            let mut last = false;
            move || {
                let past = window.scroll_y().map(past_fold).unwrap_or(false);
                if past != last {
                    last = past;
                    on_change(past);
                }
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(ScrollWatch { callback })
    }
}

impl Drop for ScrollWatch {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_boundary_is_exclusive() {
        assert!(!past_fold(0.0));
        assert!(!past_fold(SCROLLED_NAV_OFFSET_PX));
        assert!(past_fold(SCROLLED_NAV_OFFSET_PX + 0.1));
    }
}
