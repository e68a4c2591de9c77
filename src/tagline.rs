//! Typed-tagline animation: a timer-paced state machine that reveals a
//! list of text fragments character by character.
//!
//! The machine itself ([`TaglineTyper`]) is plain Rust with no browser
//! dependency: each [`advance`](TaglineTyper::advance) call performs one
//! transition and reports how long to wait before the next one. The
//! [`Typewriter`] driver chains those transitions through a [`Timer`],
//! holding at most one pending callback at a time; dropping it cancels
//! the chain, so a torn-down view can never be mutated by a stale
//! callback. [`BrowserTimer`] is the `setTimeout`-backed implementation
//! the page runs on.
//!
//! The cadence: 500ms before the first character, 100ms per character,
//! 1000ms between fragments, fragments joined by `" | "`. Once the last
//! fragment is out the machine is complete and stays complete.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};

/// Delay between mount and the first revealed character.
pub const START_DELAY_MS: u64 = 500;
/// Delay between consecutive characters within a fragment.
pub const CHAR_DELAY_MS: u64 = 100;
/// Delay between the end of one fragment and the start of the next.
pub const FRAGMENT_PAUSE_MS: u64 = 1000;
/// Joined between fragments, revealed in one step with the pause.
pub const SEPARATOR: &str = " | ";

/// Position within the fragment sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing revealed yet.
    Pending,
    /// Revealing `fragment`; the next character starts at byte `offset`.
    Typing { fragment: usize, offset: usize },
    /// Separator appended after `next - 1`; waiting to start `next`.
    Paused { next: usize },
    /// Terminal. The text never changes again.
    Complete,
}

/// Outcome of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Schedule the next transition after this many milliseconds.
    Continue { delay_ms: u64 },
    /// The sequence is complete; nothing further is scheduled.
    Done,
}

/// The typing state machine. One [`advance`](Self::advance) call is one
/// scheduled transition firing.
#[derive(Debug, Clone)]
pub struct TaglineTyper {
    fragments: Vec<String>,
    text: String,
    phase: Phase,
}

impl TaglineTyper {
    pub fn new<S: AsRef<str>>(fragments: &[S]) -> Self {
        TaglineTyper {
            fragments: fragments.iter().map(|f| f.as_ref().to_owned()).collect(),
            text: String::new(),
            phase: Phase::Pending,
        }
    }

    /// The text revealed so far. Grows monotonically.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Perform one transition: append one character, or append the
    /// separator and start the inter-fragment pause, or finish.
    ///
    /// Calling this after completion is a no-op returning [`Advance::Done`].
    pub fn advance(&mut self) -> Advance {
        let (fragment, offset) = match self.phase {
            Phase::Complete => return Advance::Done,
            Phase::Pending => (0, 0),
            Phase::Paused { next } => (next, 0),
            Phase::Typing { fragment, offset } => (fragment, offset),
        };

        let Some(current) = self.fragments.get(fragment) else {
            self.phase = Phase::Complete;
            return Advance::Done;
        };

        if let Some(ch) = current[offset..].chars().next() {
            self.text.push(ch);
            self.phase = Phase::Typing { fragment, offset: offset + ch.len_utf8() };
            return Advance::Continue { delay_ms: CHAR_DELAY_MS };
        }

        // Fragment exhausted.
        if fragment + 1 < self.fragments.len() {
            self.text.push_str(SEPARATOR);
            self.phase = Phase::Paused { next: fragment + 1 };
            Advance::Continue { delay_ms: FRAGMENT_PAUSE_MS }
        } else {
            self.phase = Phase::Complete;
            Advance::Done
        }
    }
}

// =========================================================================
// Timer seam and driver
// =========================================================================

/// Scheduling seam between the typing chain and its host environment.
///
/// The chain keeps at most one callback pending at a time; `cancel`
/// must guarantee a cancelled callback never fires.
pub trait Timer {
    /// Token for one scheduled callback.
    type Pending;

    /// Run `fire` once after `delay`, or return `None` when scheduling
    /// is impossible (the chain then simply stops).
    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Option<Self::Pending>;

    /// Revoke a callback scheduled earlier.
    fn cancel(&self, pending: Self::Pending);
}

/// [`Timer`] backed by `window.setTimeout`.
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Pending = TimeoutHandle;

    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        // Err means there is no window to schedule on (not a browser);
        // the animation simply never starts.
        set_timeout_with_handle(fire, delay).ok()
    }

    fn cancel(&self, pending: TimeoutHandle) {
        pending.clear();
    }
}

/// Owns the callback chain driving a [`TaglineTyper`].
///
/// At most one callback is pending at any moment. Dropping the
/// `Typewriter` cancels it, which stops the animation for good.
pub struct Typewriter<T: Timer = BrowserTimer> {
    chain: Rc<Chain<T>>,
}

struct Chain<T: Timer> {
    timer: T,
    typer: RefCell<TaglineTyper>,
    pending: RefCell<Option<T::Pending>>,
    on_text: Box<dyn Fn(String)>,
    on_complete: Box<dyn Fn()>,
}

impl Typewriter<BrowserTimer> {
    /// Start typing `fragments` on the browser timer. `on_text` receives
    /// the full revealed text after every change; `on_complete` fires
    /// once, at the end.
    pub fn start<S: AsRef<str>>(
        fragments: &[S],
        on_text: impl Fn(String) + 'static,
        on_complete: impl Fn() + 'static,
    ) -> Self {
        Typewriter::start_on(BrowserTimer, fragments, on_text, on_complete)
    }
}

impl<T: Timer + 'static> Typewriter<T> {
    /// [`start`](Typewriter::start) against an arbitrary [`Timer`].
    pub fn start_on<S: AsRef<str>>(
        timer: T,
        fragments: &[S],
        on_text: impl Fn(String) + 'static,
        on_complete: impl Fn() + 'static,
    ) -> Typewriter<T> {
        let chain = Rc::new(Chain {
            timer,
            typer: RefCell::new(TaglineTyper::new(fragments)),
            pending: RefCell::new(None),
            on_text: Box::new(on_text),
            on_complete: Box::new(on_complete),
        });
        schedule_step(&chain, Duration::from_millis(START_DELAY_MS));
        Typewriter { chain }
    }
}

impl<T: Timer> Drop for Typewriter<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.chain.pending.borrow_mut().take() {
            self.chain.timer.cancel(pending);
        }
    }
}

/// Schedule one transition; each fired transition schedules its
/// successor until the machine reports [`Advance::Done`].
fn schedule_step<T: Timer + 'static>(chain: &Rc<Chain<T>>, delay: Duration) {
    let fire = {
        let chain = Rc::clone(chain);
        Box::new(move || {
            let step = chain.typer.borrow_mut().advance();
            match step {
                Advance::Continue { delay_ms } => {
                    (chain.on_text)(chain.typer.borrow().text().to_owned());
                    schedule_step(&chain, Duration::from_millis(delay_ms));
                }
                Advance::Done => {
                    chain.pending.borrow_mut().take();
                    (chain.on_complete)();
                }
            }
        })
    };
    *chain.pending.borrow_mut() = chain.timer.schedule(delay, fire);
}

// =========================================================================
// Tests
// =========================================================================
