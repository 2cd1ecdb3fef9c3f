/// Scroll axis of a picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A container extent as reported by the layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extent {
    Bounded(u32),
    Unbounded,
}

impl Extent {
    pub fn bounded(self) -> Option<u32> {
        match self {
            Self::Bounded(px) => Some(px),
            Self::Unbounded => None,
        }
    }

    /// Splits a bounded extent into `parts` equal shares (floor division).
    pub fn split(self, parts: u32) -> Self {
        match self {
            Self::Bounded(px) => Self::Bounded(px / parts.max(1)),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl From<u32> for Extent {
    fn from(px: u32) -> Self {
        Self::Bounded(px)
    }
}

/// Maximum width/height offered to a picker by its parent layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    pub max_width: Extent,
    pub max_height: Extent,
}

impl Constraints {
    pub fn fixed(width: u32, height: u32) -> Self {
        Self {
            max_width: Extent::Bounded(width),
            max_height: Extent::Bounded(height),
        }
    }
}

/// Pixel size of one item cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSize {
    pub width: u32,
    pub height: u32,
}

/// Density-independent size of one item cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpSize {
    pub width: f32,
    pub height: f32,
}

/// Scroll position of a lazy list expressed as its leading (first visible) item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub leading_index: usize,
    /// Pixels the leading item has been scrolled past its start.
    pub leading_offset_px: u32,
}

impl ScrollPosition {
    pub fn new(leading_index: usize, leading_offset_px: u32) -> Self {
        Self {
            leading_index,
            leading_offset_px,
        }
    }

    /// Absolute scroll offset for lists with uniform `item_size_px` items.
    pub fn absolute_px(&self, item_size_px: u32) -> i64 {
        self.leading_index as i64 * item_size_px as i64 + self.leading_offset_px as i64
    }
}
