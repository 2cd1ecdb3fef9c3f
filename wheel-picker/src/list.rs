use crate::ScrollPosition;

/// Layout inputs of a uniform-item lazy list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListLayout {
    pub item_count: usize,
    pub item_size_px: u32,
    /// Content padding applied both before the first and after the last item.
    pub content_padding_px: u32,
    pub viewport_px: u32,
}

impl ListLayout {
    pub fn total_size_px(&self) -> u64 {
        let items = self.item_count as u64 * self.item_size_px as u64;
        items + 2 * self.content_padding_px as u64
    }

    pub fn max_scroll_offset_px(&self) -> u64 {
        self.total_size_px()
            .saturating_sub(self.viewport_px as u64)
    }
}

/// The scrollable list a picker drives.
///
/// UI adapters implement this on top of their framework's lazy list; [`ListState`] is a
/// framework-free implementation for uniform items.
pub trait ScrollableList {
    /// Current position as leading item plus offset into it.
    fn scroll_position(&self) -> ScrollPosition;

    /// Scrolls by a relative delta and returns the amount actually consumed.
    fn scroll_by(&mut self, delta_px: i64) -> i64;

    /// Applies new layout metrics (item count, sizes, padding).
    fn apply_layout(&mut self, layout: ListLayout);
}

/// A headless lazy list with uniform item size and symmetric content padding.
///
/// The scroll offset is measured from the start of the content, padding included, and is
/// always clamped to `0..=max_scroll_offset_px`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    layout: ListLayout,
    offset_px: u64,
}

impl ListState {
    pub fn new(layout: ListLayout) -> Self {
        Self {
            layout,
            offset_px: 0,
        }
    }

    pub fn layout(&self) -> ListLayout {
        self.layout
    }

    pub fn scroll_offset(&self) -> u64 {
        self.offset_px
    }

    /// Jumps to an absolute offset (clamped), without animation.
    pub fn set_scroll_offset(&mut self, offset_px: u64) {
        self.offset_px = offset_px.min(self.layout.max_scroll_offset_px());
    }

    /// Indexes of the items at least partially inside the viewport.
    pub fn visible_items(&self) -> core::ops::Range<usize> {
        let item = self.layout.item_size_px as u64;
        if item == 0 || self.layout.item_count == 0 {
            return 0..0;
        }
        let pad = self.layout.content_padding_px as u64;
        let start_px = self.offset_px.saturating_sub(pad);
        let end_px = (self.offset_px + self.layout.viewport_px as u64).saturating_sub(pad);
        let start = (start_px / item) as usize;
        let end = end_px.div_ceil(item) as usize;
        start.min(self.layout.item_count)..end.min(self.layout.item_count)
    }
}

impl ScrollableList for ListState {
    fn scroll_position(&self) -> ScrollPosition {
        let item = self.layout.item_size_px as u64;
        if item == 0 || self.layout.item_count == 0 {
            return ScrollPosition::default();
        }
        let leading_index = ((self.offset_px / item) as usize).min(self.layout.item_count - 1);
        let leading_offset_px = self.offset_px - leading_index as u64 * item;
        ScrollPosition::new(leading_index, leading_offset_px as u32)
    }

    fn scroll_by(&mut self, delta_px: i64) -> i64 {
        let max = self.layout.max_scroll_offset_px() as i64;
        let current = self.offset_px as i64;
        let next = current.saturating_add(delta_px).clamp(0, max);
        self.offset_px = next as u64;
        next - current
    }

    fn apply_layout(&mut self, layout: ListLayout) {
        let prev = self.layout;
        self.layout = layout;
        if prev.item_size_px != 0
            && layout.item_size_px != 0
            && prev.item_size_px != layout.item_size_px
        {
            // Keep the same leading item, scaling the partial offset into it.
            let old_item = prev.item_size_px as u64;
            let new_item = layout.item_size_px as u64;
            let index = self.offset_px / old_item;
            let within = self.offset_px % old_item;
            self.offset_px = index * new_item + within * new_item / old_item;
        }
        self.offset_px = self.offset_px.min(layout.max_scroll_offset_px());
    }
}
