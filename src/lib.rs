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

//! Pointer target tracking and click / hold / drag gesture recognition.
//!
//! A host polls one [`input::MouseBehaviour`] per frame with a
//! [`input::PointerFrame`] and a [`picking::Raycaster`]. The component
//! works out which object is under the pointer, notifies leave/enter
//! observers when that changes, and classifies the single active
//! pointer-button interaction as a click, double-click, hold or drag.
//!
//! # Key entry points
//!
//! - [`input::MouseBehaviour`] - the per-frame component
//! - [`gesture::GestureClassifier`] - the gesture state machine on its own
//! - [`target::TargetTracker`] - hovered-target tracking on its own
//! - [`options::Options`] - reach, layer mask and gesture thresholds
//! - [`scope::SceneSlot`] - one-instance-per-scene ownership
//! - [`replay::Trace`] - scripted TOML traces
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use pointer_gestures::gesture::GestureEventKind;
//! use pointer_gestures::input::{
//!     MouseBehaviour, MouseButton, PointerEvent, PointerFrame,
//! };
//! use pointer_gestures::options::Options;
//! use pointer_gestures::picking::ColliderSet;
//!
//! let scene = ColliderSet::new();
//! let mut pointer = MouseBehaviour::new(&Options::default());
//!
//! let down = PointerFrame::new(0.0, Vec2::ZERO).with_pressed(MouseButton::Left);
//! let up = PointerFrame::new(0.05, Vec2::ZERO).with_released(MouseButton::Left);
//! assert!(pointer.update(&down, &scene).is_empty());
//! let events = pointer.update(&up, &scene);
//! assert!(matches!(
//!     events.as_slice(),
//!     [PointerEvent::Gesture(g)] if g.kind == GestureEventKind::Click
//! ));
//! ```

pub mod error;
pub mod gesture;
pub mod input;
pub mod options;
pub mod picking;
pub mod replay;
pub mod scope;
pub mod target;
pub mod util;
