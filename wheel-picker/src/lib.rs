//! A headless scroll-selection engine for wheel-style pickers.
//!
//! For presentation-level pieces (style tokens, item view-models, double pickers), see the
//! `wheel-picker-widgets` crate.
//!
//! The engine turns a continuously scrolled list of uniform items into a discrete selected
//! index, animates programmatic scroll-to-index transitions, and reconciles host-driven
//! selection changes with user gestures without feedback loops.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - container constraints (width/height, possibly unbounded)
//! - a frame clock (monotonic milliseconds passed to [`PickerEngine::tick`])
//! - user input (drag deltas, wheel deltas, taps)
//! - optionally its own lazy list through [`ScrollableList`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod fling;
mod geometry;
mod list;
mod observer;
mod options;
mod reconcile;
mod scroller;
mod tween;
mod types;
mod value;


pub use engine::PickerEngine;
pub use error::ConfigError;
pub use fling::{FlingConfig, VelocityTracker};
pub use geometry::{DEFAULT_VISIBLE_COUNT, ItemGeometry, calculate_item_size};
pub use list::{ListLayout, ListState, ScrollableList};
pub use observer::SelectionObserver;
pub use options::{OnExternalScrollCallback, OnSelectCallback, PickerOptions};
pub use reconcile::{ExternalChange, LockState, ReconcileState, ReconciliationController};
pub use scroller::{SCROLL_DURATION_MS, ScrollAnimator};
pub use tween::{Easing, Tween};
pub use types::{Constraints, DpSize, Extent, ItemSize, Orientation, ScrollPosition};
pub use value::{PickerValue, ensure_unique, index_of};
