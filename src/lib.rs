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
// Complexity limits (thresholds in clippy.toml)
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

//! Scroll-synchronized animation timeline for 3D product showcases.
//!
//! Vitrine turns a page of narrative sections into one master timeline
//! whose playhead follows scroll position. Each section is a chapter; its
//! label is a join point for camera and model-part keyframes. A pinned
//! layer holds the 3D render in place while the sections scroll past.
//!
//! # Key entry points
//!
//! - [`showcase::Showcase`] - page, scroll registry, scene slot, and stage
//!   wired together
//! - [`stage::Stage`] - the mount / variant / cleanup state machine
//! - [`timeline::Timeline`] - label-addressed keyframes sampled by progress
//! - [`scroll::ScrollRegistry`] - pin, scrub, and toggle triggers
//! - [`options::Options`] - breakpoints, scrub lag, framings, reveal
//!   timing, model part names
//!
//! # Host seams
//!
//! The crate never touches a real page or GPU directly. A host implements
//! [`dom::Document`], [`host::Environment`], and [`scene::SceneProvider`]
//! (the `web` feature ships browser adapters); headless runs use
//! [`dom::StaticDocument`], [`host::StaticEnvironment`], and
//! [`scene::ShowcaseScene`].
//!
//! When the user prefers reduced motion, the stage skips pinning,
//! scrubbing, and scene changes, and fades each chapter in as it scrolls
//! into view instead.

pub mod content;
pub mod dom;
pub mod error;
pub mod host;
pub mod options;
pub mod responsive;
pub mod scene;
pub mod scroll;
pub mod showcase;
pub mod stage;
pub mod timeline;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
