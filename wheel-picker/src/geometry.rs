use crate::{Constraints, DpSize, ItemSize, Orientation};

/// Default number of simultaneously visible item slots.
pub const DEFAULT_VISIBLE_COUNT: usize = 3;

/// Computes the pixel size of a single item cell.
///
/// The main-axis dimension (height for vertical pickers, width for horizontal ones) is the
/// container extent divided by `visible_count`, truncated. The cross-axis dimension spans the
/// whole container. A dimension whose container extent is unbounded comes out as `0`; the
/// caller is expected to supply a concrete size upstream.
pub fn calculate_item_size(
    orientation: Orientation,
    constraints: Constraints,
    visible_count: usize,
) -> ItemSize {
    debug_assert!(visible_count > 0, "visible_count must be positive");
    let visible = visible_count.max(1) as u32;

    let height = match constraints.max_height.bounded() {
        Some(h) if orientation == Orientation::Vertical => h / visible,
        Some(h) => h,
        None => 0,
    };
    let width = match constraints.max_width.bounded() {
        Some(w) if orientation == Orientation::Horizontal => w / visible,
        Some(w) => w,
        None => 0,
    };

    ItemSize { width, height }
}

/// Derived sizing for one picker instance.
///
/// Recomputed whenever the layout constraints or the visible count change.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    pub orientation: Orientation,
    pub visible_count: usize,
    pub item_size: ItemSize,
    /// Physical pixels per density-independent pixel.
    pub density: f32,
}

impl ItemGeometry {
    pub fn new(
        orientation: Orientation,
        constraints: Constraints,
        visible_count: usize,
        density: f32,
    ) -> Self {
        Self {
            orientation,
            visible_count,
            item_size: calculate_item_size(orientation, constraints, visible_count),
            density,
        }
    }

    /// Geometry with a known main-axis item size and no cross-axis extent.
    pub fn from_item_size(orientation: Orientation, visible_count: usize, item_px: u32) -> Self {
        let item_size = match orientation {
            Orientation::Vertical => ItemSize {
                width: 0,
                height: item_px,
            },
            Orientation::Horizontal => ItemSize {
                width: item_px,
                height: 0,
            },
        };
        Self {
            orientation,
            visible_count,
            item_size,
            density: 1.0,
        }
    }

    pub fn main_axis_px(&self) -> u32 {
        match self.orientation {
            Orientation::Vertical => self.item_size.height,
            Orientation::Horizontal => self.item_size.width,
        }
    }

    pub fn cross_axis_px(&self) -> u32 {
        match self.orientation {
            Orientation::Vertical => self.item_size.width,
            Orientation::Horizontal => self.item_size.height,
        }
    }

    pub fn item_size_dp(&self) -> DpSize {
        let density = if self.density > 0.0 { self.density } else { 1.0 };
        DpSize {
            width: self.item_size.width as f32 / density,
            height: self.item_size.height as f32 / density,
        }
    }

    pub fn main_axis_dp(&self) -> f32 {
        let dp = self.item_size_dp();
        match self.orientation {
            Orientation::Vertical => dp.height,
            Orientation::Horizontal => dp.width,
        }
    }

    pub fn cross_axis_dp(&self) -> f32 {
        let dp = self.item_size_dp();
        match self.orientation {
            Orientation::Vertical => dp.width,
            Orientation::Horizontal => dp.height,
        }
    }

    /// Correction added to the leading index so that it names the center slot.
    ///
    /// Negative for a single visible slot.
    pub fn center_index_offset(&self) -> isize {
        (self.visible_count / 2) as isize - 1
    }

    /// Content padding applied at both ends of the list (one item slot).
    pub fn padding_px(&self) -> u32 {
        self.main_axis_px()
    }

    /// Main-axis length of the scroll viewport.
    pub fn viewport_px(&self) -> u32 {
        self.main_axis_px()
            .saturating_mul(self.visible_count as u32)
    }

    /// Distance from the viewport start to the start of the center slot.
    pub fn center_offset_px(&self) -> i64 {
        let item = self.main_axis_px() as i64;
        (self.visible_count as i64 * item) / 2 - item / 2
    }

    /// Absolute scroll offset at which `index` rests in the center slot.
    ///
    /// The leading `item` term accounts for the padding slot in front of the first item.
    pub fn target_scroll_position_px(&self, index: usize) -> i64 {
        let item = self.main_axis_px() as i64;
        item + index as i64 * item - self.center_offset_px()
    }
}
