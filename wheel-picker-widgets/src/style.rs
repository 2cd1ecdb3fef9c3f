use wheel_picker::Orientation;

/// An sRGB color with alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self::rgba((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 0xFF)
    }
}

/// Corner radii in dp, named relative to the layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerRadii {
    pub top_start: f32,
    pub top_end: f32,
    pub bottom_start: f32,
    pub bottom_end: f32,
}

impl CornerRadii {
    pub const ZERO: Self = Self::all(0.0);

    pub const fn all(radius: f32) -> Self {
        Self {
            top_start: radius,
            top_end: radius,
            bottom_start: radius,
            bottom_end: radius,
        }
    }

    /// Rounds only the start side (left in LTR).
    pub const fn start(radius: f32) -> Self {
        Self {
            top_start: radius,
            top_end: 0.0,
            bottom_start: radius,
            bottom_end: 0.0,
        }
    }

    pub const fn end(radius: f32) -> Self {
        Self {
            top_start: 0.0,
            top_end: radius,
            bottom_start: 0.0,
            bottom_end: radius,
        }
    }

    pub const fn top(radius: f32) -> Self {
        Self {
            top_start: radius,
            top_end: radius,
            bottom_start: 0.0,
            bottom_end: 0.0,
        }
    }

    pub const fn bottom(radius: f32) -> Self {
        Self {
            top_start: 0.0,
            top_end: 0.0,
            bottom_start: radius,
            bottom_end: radius,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    #[default]
    Rectangle,
    Rounded(CornerRadii),
}

impl Shape {
    pub fn radii(&self) -> CornerRadii {
        match self {
            Self::Rectangle => CornerRadii::ZERO,
            Self::Rounded(radii) => *radii,
        }
    }
}

/// Visual tokens shared by every picker variant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerStyle {
    /// Background behind the items.
    pub surface_color: Color,
    pub indicator_color: Color,
    pub indicator_shape: Shape,
    pub selected_item_text_color: Color,
    pub unselected_item_text_color: Color,
    /// Cross-axis text shift in dp; positive moves towards the end.
    pub text_offset_dp: f32,
}

/// Style of a standalone picker: the shared tokens plus the outer surface shape.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinglePickerStyle {
    pub base: PickerStyle,
    pub surface_shape: Shape,
}

impl SinglePickerStyle {
    pub fn text_offset_dp(&self) -> f32 {
        self.base.text_offset_dp
    }
}

/// One half of a double picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Part {
    /// Left half when side by side, top half when stacked.
    First,
    Second,
}

/// Style of a double picker. Both halves share colors and indicator; each has its own surface
/// shape, and the text offset is mirrored between them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoublePickerStyle {
    pub base: PickerStyle,
    pub surface_shapes: (Shape, Shape),
}

impl DoublePickerStyle {
    /// The standalone style for one half.
    ///
    /// [`Part::First`] keeps the text offset, [`Part::Second`] negates it.
    pub fn as_single(&self, part: Part) -> SinglePickerStyle {
        let (text_offset_dp, surface_shape) = match part {
            Part::First => (self.base.text_offset_dp, self.surface_shapes.0),
            Part::Second => (-self.base.text_offset_dp, self.surface_shapes.1),
        };
        SinglePickerStyle {
            base: PickerStyle {
                text_offset_dp,
                ..self.base
            },
            surface_shape,
        }
    }
}

/// Surface shapes for the two halves of a double picker, so that together they read as one
/// rounded rectangle.
///
/// Vertical pickers sit side by side (start half, end half); horizontal pickers are stacked
/// (top half, bottom half).
pub fn double_surface_shapes(orientation: Orientation, radius_dp: f32) -> (Shape, Shape) {
    match orientation {
        Orientation::Vertical => (
            Shape::Rounded(CornerRadii::start(radius_dp)),
            Shape::Rounded(CornerRadii::end(radius_dp)),
        ),
        Orientation::Horizontal => (
            Shape::Rounded(CornerRadii::top(radius_dp)),
            Shape::Rounded(CornerRadii::bottom(radius_dp)),
        ),
    }
}
