use crate::{Easing, ItemGeometry, ScrollPosition, ScrollableList, Tween};

/// Duration of an animated scroll-to-item.
pub const SCROLL_DURATION_MS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ScrollJob {
    target_index: usize,
    delta_px: i64,
    /// Captured on the first frame after the request.
    tween: Option<Tween>,
    applied_px: i64,
    external: bool,
}

/// Drives animated, cancelable scroll-to-item transitions on a [`ScrollableList`].
///
/// At most one job is in flight; a new request cancels the current one before it starts.
/// Progress is applied as relative `scroll_by` increments, so user scrolling that happens while
/// an animation runs composes with it instead of being overwritten.
///
/// Jobs started through [`ScrollAnimator::externally_scroll_to_item`] are tagged external. The
/// `on_external` callback passed to each call receives `true` when such a job starts and
/// `false` exactly once when it completes or is cancelled.
#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    geometry: ItemGeometry,
    duration_ms: u64,
    easing: Easing,
    job: Option<ScrollJob>,
}

impl ScrollAnimator {
    pub fn new(geometry: ItemGeometry, duration_ms: u64, easing: Easing) -> Self {
        Self {
            geometry,
            duration_ms,
            easing,
            job: None,
        }
    }

    pub fn geometry(&self) -> &ItemGeometry {
        &self.geometry
    }

    /// Replaces the geometry used for future jobs. A job in flight keeps its delta.
    pub fn set_geometry(&mut self, geometry: ItemGeometry) {
        self.geometry = geometry;
    }

    pub fn is_animating(&self) -> bool {
        self.job.is_some()
    }

    /// Whether the job in flight was started externally.
    pub fn is_external(&self) -> bool {
        self.job.is_some_and(|job| job.external)
    }

    pub fn target_index(&self) -> Option<usize> {
        self.job.map(|job| job.target_index)
    }

    /// Pixel distance from `position` to the position centering `index`.
    pub fn delta_to_item(&self, index: usize, position: ScrollPosition) -> i64 {
        let target = self.geometry.target_scroll_position_px(index);
        let current = position.absolute_px(self.geometry.main_axis_px());
        target - current
    }

    /// Starts animating so that `index` ends up in the center slot.
    ///
    /// Returns `false` when the list already rests on `index` and nothing was started.
    pub fn scroll_to_item<L: ScrollableList + ?Sized>(
        &mut self,
        index: usize,
        list: &L,
        on_external: &mut dyn FnMut(bool),
    ) -> bool {
        self.cancel(on_external);
        self.start(index, false, list, on_external)
    }

    /// Same as [`ScrollAnimator::scroll_to_item`], but tags the job as external.
    pub fn externally_scroll_to_item<L: ScrollableList + ?Sized>(
        &mut self,
        index: usize,
        list: &L,
        on_external: &mut dyn FnMut(bool),
    ) -> bool {
        // The superseded job must release before the new one claims the flag.
        self.cancel(on_external);
        pdebug!(index, "external scroll started");
        on_external(true);
        self.start(index, true, list, on_external)
    }

    /// Cancels the job in flight, keeping whatever scroll it already applied.
    ///
    /// Returns `true` if a job was cancelled.
    pub fn cancel(&mut self, on_external: &mut dyn FnMut(bool)) -> bool {
        let Some(job) = self.job.take() else {
            return false;
        };
        ptrace!(
            target_index = job.target_index,
            applied_px = job.applied_px,
            delta_px = job.delta_px,
            "scroll job cancelled"
        );
        Self::finalize(job, on_external);
        true
    }

    /// Advances the job in flight by one frame.
    ///
    /// Returns `true` while a job remains in flight after this frame.
    pub fn tick<L: ScrollableList + ?Sized>(
        &mut self,
        now_ms: u64,
        list: &mut L,
        on_external: &mut dyn FnMut(bool),
    ) -> bool {
        let Some(job) = self.job.as_mut() else {
            return false;
        };

        let Some(tween) = job.tween else {
            job.tween = Some(Tween::new(
                0,
                job.delta_px,
                now_ms,
                self.duration_ms,
                self.easing,
            ));
            return true;
        };

        let value = tween.sample(now_ms);
        let step = value - job.applied_px;
        if step != 0 {
            list.scroll_by(step);
        }
        job.applied_px = value;

        if !tween.is_done(now_ms) {
            return true;
        }

        if let Some(job) = self.job.take() {
            ptrace!(target_index = job.target_index, "scroll job finished");
            Self::finalize(job, on_external);
        }
        false
    }

    fn start<L: ScrollableList + ?Sized>(
        &mut self,
        index: usize,
        external: bool,
        list: &L,
        on_external: &mut dyn FnMut(bool),
    ) -> bool {
        let delta_px = self.delta_to_item(index, list.scroll_position());
        let job = ScrollJob {
            target_index: index,
            delta_px,
            tween: None,
            applied_px: 0,
            external,
        };
        if delta_px == 0 {
            Self::finalize(job, on_external);
            return false;
        }
        ptrace!(index, delta_px, external, "scroll job started");
        self.job = Some(job);
        true
    }

    fn finalize(job: ScrollJob, on_external: &mut dyn FnMut(bool)) {
        if job.external {
            pdebug!(target_index = job.target_index, "external scroll finished");
            on_external(false);
        }
    }
}
