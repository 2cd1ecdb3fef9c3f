use crate::{ItemGeometry, ScrollPosition};

/// Turns scroll position samples into a deduplicated stream of candidate indexes.
///
/// The candidate is the leading item index, bumped by one once the leading item has scrolled
/// past half of its size, plus the geometry's center index offset. An offset of exactly half an
/// item does not bump. Candidates may be negative or past the item count; range filtering is
/// left to the caller.
#[derive(Clone, Debug)]
pub struct SelectionObserver {
    item_size_px: u32,
    center_index_offset: isize,
    last: Option<isize>,
}

impl SelectionObserver {
    pub fn new(item_size_px: u32, center_index_offset: isize) -> Self {
        Self {
            item_size_px,
            center_index_offset,
            last: None,
        }
    }

    pub fn for_geometry(geometry: &ItemGeometry) -> Self {
        Self::new(geometry.main_axis_px(), geometry.center_index_offset())
    }

    /// Maps a single sample to its candidate index, without deduplication.
    pub fn candidate(&self, position: ScrollPosition) -> isize {
        let half_item_px = self.item_size_px / 2;
        let bump = isize::from(position.leading_offset_px > half_item_px);
        position.leading_index as isize + bump + self.center_index_offset
    }

    /// Feeds a sample; returns the candidate only when it differs from the last emission.
    pub fn observe(&mut self, position: ScrollPosition) -> Option<isize> {
        let candidate = self.candidate(position);
        if self.last == Some(candidate) {
            return None;
        }
        self.last = Some(candidate);
        Some(candidate)
    }

    /// Forgets the last emission so the next sample is emitted unconditionally.
    pub fn restart(&mut self) {
        self.last = None;
    }

    pub fn last_emitted(&self) -> Option<isize> {
        self.last
    }
}
