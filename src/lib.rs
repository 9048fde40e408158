// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (default thresholds)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Error docs live on SproutError, not on every fallible setup call
#![allow(clippy::missing_errors_doc)]

//! Scroll-linked page enhancements for a static informational site.
//!
//! Sprout wires small pieces of behaviour onto server-rendered markup:
//! active nav links, smooth in-page scrolling, fade-in on scroll, stat
//! counters that count up once visible, lazy video embeds, a scroll
//! progress bar and a mobile menu toggle.
//!
//! # Key entry points
//!
//! - [`site::Site`] - installs every feature and routes host events
//! - [`host::Host`] - the browsing context the features operate on
//! - [`options::Options`] - selectors, classes and timing (TOML)
//! - [`sim::SimHost`] - in-memory page for tests
//!
//! # Architecture
//!
//! All logic runs on the page's event loop. The host turns DOM callbacks
//! (intersection observers, clicks, scroll, animation frames, timers) into
//! [`host::PageEvent`]s and hands them to [`site::Site::handle`]. The pure
//! parts (easing, counter formatting, scroll percentage, visible fraction)
//! live in [`util`], [`counter`], [`progress`] and [`geometry`] and are
//! tested without any host. The browser host is behind the `web` feature.

pub mod counter;
pub mod error;
pub mod geometry;
pub mod host;
pub mod navigation;
pub mod options;
pub mod progress;
pub mod reveal;
pub mod sim;
pub mod site;
pub mod util;
pub mod video;
pub mod visibility;
#[cfg(feature = "web")]
pub mod web;

pub use error::SproutError;
pub use host::{Host, PageEvent};
pub use options::Options;
pub use site::Site;
