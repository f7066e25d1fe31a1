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
// Complexity limits
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
// Tests may unwrap
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Interactive 3D skill-map scene engine.
//!
//! Skillscape orchestrates an explorable scene of labeled tech nodes:
//! clicking a node focuses the camera on it and fans its projects out as
//! satellites, clicking it again (or closing the detail panel) returns to
//! an auto-rotating overview. The engine owns selection, camera smoothing,
//! decorative animation, frame-rate sampling and on-demand draw scheduling,
//! and hands a renderer a plain-data [`scene::SceneFrame`] for every frame
//! that needs drawing.
//!
//! # Key entry points
//!
//! - [`SceneEngine`] - the orchestration engine
//! - [`SceneCommand`] - every intent the engine understands
//! - [`catalog::Catalog`] - the immutable node catalog
//! - [`input::InputProcessor`] - raw pointer/key events to intents
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame loop
//!
//! Hosts call [`SceneEngine::execute`] for each intent and
//! [`SceneEngine::frame`] once per animation callback. Every intent
//! invalidates, so the next callback draws; afterwards the engine keeps
//! drawing only while the camera is still easing, a drag is in progress,
//! the overview is auto-rotating or node scales are settling.
//! [`SceneEngine::wants_frame`] lets a host idle otherwise.

pub mod audio;
pub mod camera;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod selection;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use catalog::{Catalog, NodeId, TechNode};
pub use engine::command::SceneCommand;
pub use engine::{FrameOutcome, SceneEngine};
pub use error::SkillscapeError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use options::Options;
pub use scene::{FrameSink, PickTarget, SceneFrame};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
