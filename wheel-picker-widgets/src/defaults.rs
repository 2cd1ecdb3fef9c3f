//! Default style tokens.
//!
//! Colors are derived from a [`Palette`], so a host can map its own theme onto the picker
//! tokens in one place.
use wheel_picker::Orientation;

use crate::{
    Color, DoublePickerStyle, PickerStyle, Shape, SinglePickerStyle, double_surface_shapes,
};

/// Default number of simultaneously visible items.
pub const ITEMS_VISIBLE: usize = wheel_picker::DEFAULT_VISIBLE_COUNT;

/// Corner radius of the outer picker surface, in dp.
pub const CORNER_RADIUS_DP: f32 = 16.0;

/// Text offset applied (mirrored) to the halves of a double picker, in dp.
pub const DOUBLE_TEXT_OFFSET_DP: f32 = 6.0;

/// The theme colors the default styles are built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Slightly elevated surface color.
    pub surface: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,
    pub on_surface_variant: Color,
}

impl Default for Palette {
    /// Material 3 baseline light scheme.
    fn default() -> Self {
        Self {
            surface: Color::from_rgb(0xF3EDF7),
            primary_container: Color::from_rgb(0xEADDFF),
            on_primary_container: Color::from_rgb(0x21005D),
            on_surface_variant: Color::from_rgb(0x49454F),
        }
    }
}

/// The shared tokens: the indicator uses the primary container, the selected text its
/// content color.
pub fn picker_style(palette: &Palette) -> PickerStyle {
    PickerStyle {
        surface_color: palette.surface,
        indicator_color: palette.primary_container,
        indicator_shape: Shape::Rectangle,
        selected_item_text_color: palette.on_primary_container,
        unselected_item_text_color: palette.on_surface_variant,
        text_offset_dp: 0.0,
    }
}

pub fn single_picker_style(palette: &Palette) -> SinglePickerStyle {
    SinglePickerStyle {
        base: picker_style(palette),
        surface_shape: Shape::Rounded(crate::CornerRadii::all(CORNER_RADIUS_DP)),
    }
}

pub fn double_picker_style(palette: &Palette, orientation: Orientation) -> DoublePickerStyle {
    DoublePickerStyle {
        base: PickerStyle {
            text_offset_dp: DOUBLE_TEXT_OFFSET_DP,
            ..picker_style(palette)
        },
        surface_shapes: double_surface_shapes(orientation, CORNER_RADIUS_DP),
    }
}
