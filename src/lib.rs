//! # Biruk Portfolio
//!
//! A single-page portfolio site compiled to WebAssembly. One scrolling
//! page with five sections (hero, about, projects, experience, contact)
//! where the content is fixed at build time and the only moving parts are
//! the handful of interactions that make the page feel alive.
//!
//! # Architecture: Pure Core, Browser Shell
//!
//! Every interactive behavior is split into a plain-Rust state machine and
//! a thin browser adapter that feeds it:
//!
//! ```text
//! TaglineTyper      ←  Typewriter        (setTimeout chain)
//! SectionTracker    ←  SectionSpy        (IntersectionObserver)
//! past_fold         ←  ScrollWatch       (scroll listener)
//! SubmissionState   ←  EmailRelay::send  (fetch)
//! ```
//!
//! The state machines know nothing about the DOM, so unit tests drive them
//! directly: feed observations in, assert the decisions out. The adapters
//! contain no decisions of their own; they translate browser events into
//! calls on the core and are torn down through `Drop`, so disposing a
//! component cancels its timers and disconnects its observers.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`components`] | Leptos view tree, one module per page section plus the app shell |
//! | [`config`] | Embedded `site.toml` loading and validation (identity + relay credentials) |
//! | [`content`] | Fixed page content: sections, nav targets, skills, projects, experience |
//! | [`relay`] | Contact form delivery over the EmailJS REST API and its submission state machine |
//! | [`sanitize`] | HTML entity escaping applied to form fields before they leave the page |
//! | [`scroll`] | Smooth scrolling to sections and the past-the-fold nav restyle |
//! | [`tagline`] | Character-by-character hero tagline animation |
//! | [`tracker`] | Section visibility tracking that drives the active nav link |
//!
//! # Design Decisions
//!
//! ## Client-Side Rendering Only
//!
//! The site is a fixed portfolio: no server state, no routing, no
//! hydration concerns. Leptos in CSR mode keeps the deploy story a static
//! file server, the same as the hand-written HTML it replaces.
//!
//! ## Embedded Configuration
//!
//! `site.toml` is compiled in with `include_str!` rather than fetched at
//! runtime. The page renders identically with or without network access,
//! and a malformed config is caught by the test suite instead of a blank
//! page in production. Relay credentials live there too: the EmailJS
//! public key is designed to be shipped to browsers, so embedding it
//! costs nothing.
//!
//! ## Explicit Tie-Break for the Active Section
//!
//! When several sections clear the visibility threshold in one observer
//! batch, the topmost one wins. Relying on callback order instead would
//! make the nav highlight depend on unspecified browser behavior; the
//! rule lives in [`tracker::SectionTracker::observe`] where a test can
//! pin it down.

pub mod components;
pub mod config;
pub mod content;
pub mod relay;
pub mod sanitize;
pub mod scroll;
pub mod tagline;
pub mod tracker;
