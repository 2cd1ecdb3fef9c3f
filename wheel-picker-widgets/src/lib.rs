//! Picker widgets for the `wheel-picker` engine.
//!
//! The `wheel-picker` crate is UI-agnostic and index-only. This crate adds the presentation
//! glue a UI layer needs on top of it:
//!
//! - Style tokens for single and double pickers, with theme-derived defaults
//! - Item view-models (label, selected flag, size) for the visible range
//! - Generic pickers over item lists, in index mode and in value mode
//! - Double pickers: two independent engines in one frame
//!
//! This crate is intentionally framework-agnostic (no rendering backend).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod defaults;
mod double;
mod item;
mod picker;
mod style;
mod value;

#[cfg(test)]
mod tests;

pub use defaults::Palette;
pub use double::DoublePicker;
pub use item::PickerItemData;
pub use picker::{LabelFn, Picker};
pub use style::{
    Color, CornerRadii, DoublePickerStyle, Part, PickerStyle, Shape, SinglePickerStyle,
    double_surface_shapes,
};
pub use value::{OnValueChangeCallback, ValuePicker};
