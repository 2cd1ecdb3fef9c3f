use crate::{
    ConfigError, Constraints, ExternalChange, ItemGeometry, ListLayout, ListState, LockState,
    OnExternalScrollCallback, OnSelectCallback, PickerOptions, ReconcileState,
    ReconciliationController, ScrollAnimator, ScrollPosition, ScrollableList, SelectionObserver,
    VelocityTracker,
};

/// One wheel picker instance: geometry, list, observer, animator and reconciliation.
///
/// The engine is headless and single-threaded. The host drives it by calling:
/// - `layout` whenever the container constraints change
/// - `set_selected_index` on every render with its current selection
/// - `tick(now_ms)` on every frame
/// - `drag*` / `scroll_by` / `fling` / `tap` for user input
///
/// User-driven selection changes are reported through `PickerOptions::on_select`, starting
/// after the first `set_selected_index` call. The host is expected to feed the reported index
/// back through `set_selected_index`; that echo is recognized and does not animate.
#[derive(Debug)]
pub struct PickerEngine<L = ListState> {
    options: PickerOptions,
    geometry: ItemGeometry,
    list: L,
    observer: SelectionObserver,
    animator: ScrollAnimator,
    controller: ReconciliationController,
    velocity: VelocityTracker,
    dragging: bool,
    drag_remainder: f32,
    /// Last selection pushed by the host; `None` until the first push.
    host_selected: Option<Option<usize>>,
    disposed: bool,
}

impl PickerEngine<ListState> {
    /// Creates an engine backed by the built-in [`ListState`].
    pub fn new(options: PickerOptions) -> Result<Self, ConfigError> {
        Self::with_list(options, ListState::default())
    }
}

impl<L: ScrollableList> PickerEngine<L> {
    /// Creates an engine driving a host-provided list.
    ///
    /// Fails when the visible count is not odd.
    pub fn with_list(options: PickerOptions, mut list: L) -> Result<Self, ConfigError> {
        options.validate()?;
        pdebug!(
            count = options.count,
            visible_count = options.visible_count,
            orientation = ?options.orientation,
            "PickerEngine::new"
        );

        let mut geometry =
            ItemGeometry::from_item_size(options.orientation, options.visible_count, 0);
        geometry.density = options.density;

        let controller = ReconciliationController::new(options.count);
        let animator = ScrollAnimator::new(geometry, options.scroll_duration_ms, options.easing);
        list.apply_layout(list_layout(&geometry, options.count));

        Ok(Self {
            observer: SelectionObserver::for_geometry(&geometry),
            geometry,
            list,
            animator,
            controller,
            velocity: VelocityTracker::new(),
            dragging: false,
            drag_remainder: 0.0,
            host_selected: None,
            disposed: false,
            options,
        })
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn geometry(&self) -> &ItemGeometry {
        &self.geometry
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn scroll_position(&self) -> ScrollPosition {
        self.list.scroll_position()
    }

    /// The selection most recently pushed by the host.
    pub fn selected_index(&self) -> Option<usize> {
        self.controller.selected()
    }

    pub fn lock_state(&self) -> LockState {
        self.controller.locks()
    }

    pub fn reconcile_state(&self) -> ReconcileState {
        self.controller.state()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_on_select(&mut self, on_select: Option<OnSelectCallback>) {
        self.options.on_select = on_select;
    }

    pub fn set_on_external_scroll(
        &mut self,
        on_external_scroll: Option<OnExternalScrollCallback>,
    ) {
        self.options.on_external_scroll = on_external_scroll;
    }

    /// Recomputes the item geometry from new container constraints.
    pub fn layout(&mut self, constraints: Constraints) {
        let geometry = ItemGeometry::new(
            self.options.orientation,
            constraints,
            self.options.visible_count,
            self.options.density,
        );
        self.apply_geometry(geometry);
    }

    /// Sets a concrete main-axis item size, for hosts that measure items themselves.
    pub fn set_item_size_px(&mut self, item_px: u32) {
        let mut geometry = ItemGeometry::from_item_size(
            self.options.orientation,
            self.options.visible_count,
            item_px,
        );
        geometry.density = self.options.density;
        self.apply_geometry(geometry);
    }

    fn apply_geometry(&mut self, geometry: ItemGeometry) {
        if geometry == self.geometry {
            return;
        }
        let was_unmeasured = self.geometry.main_axis_px() == 0;
        ptrace!(
            item_width = geometry.item_size.width,
            item_height = geometry.item_size.height,
            "layout changed"
        );
        self.geometry = geometry;
        self.list
            .apply_layout(list_layout(&self.geometry, self.options.count));
        self.animator.set_geometry(geometry);
        self.observer = SelectionObserver::for_geometry(&geometry);

        // A selection pushed before the first measurement could not be scrolled to yet.
        if was_unmeasured && geometry.main_axis_px() > 0 {
            if let Some(Some(index)) = self.host_selected {
                if index < self.options.count && !self.controller.locks().internal_change {
                    let mut signal =
                        external_signal(&mut self.controller, &self.options.on_external_scroll);
                    self.animator
                        .externally_scroll_to_item(index, &self.list, &mut signal);
                }
            }
        }
        self.observe();
    }

    /// Updates the item count (the host's item list changed).
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        pdebug!(count, "item count changed");
        self.options.count = count;
        self.controller.set_count(count);
        self.list.apply_layout(list_layout(&self.geometry, count));
        self.observer.restart();
        self.observe();
    }

    /// The host replaced its items. Observation restarts even when the count is unchanged.
    pub fn items_replaced(&mut self, count: usize) {
        if self.options.count != count {
            self.set_count(count);
            return;
        }
        self.observer.restart();
        self.observe();
    }

    /// Pushes the host's current selection. Only changes are acted upon.
    ///
    /// A change the engine did not cause animates the list to the new index. A change that
    /// follows the engine's own `on_select` is taken as its echo and only releases the lock.
    pub fn set_selected_index(&mut self, selected: Option<usize>) {
        if self.host_selected == Some(selected) {
            return;
        }
        self.host_selected = Some(selected);

        match self.controller.on_selected_changed(selected) {
            ExternalChange::ScrollTo(index) => {
                let mut signal =
                    external_signal(&mut self.controller, &self.options.on_external_scroll);
                self.animator
                    .externally_scroll_to_item(index, &self.list, &mut signal);
            }
            ExternalChange::Echo => {
                ptrace!(?selected, "selection echo consumed");
            }
            ExternalChange::Skip if selected.is_some() => {
                pwarn!(?selected, count = self.options.count, "selection out of range, ignored");
            }
            ExternalChange::Skip => {
                ptrace!("no selection");
            }
        }

        self.observer.restart();
        self.observe();
    }

    /// Advances animations by one frame. Returns `true` while an animation is in flight.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let animating = {
            let mut signal =
                external_signal(&mut self.controller, &self.options.on_external_scroll);
            self.animator.tick(now_ms, &mut self.list, &mut signal)
        };
        self.observe();
        animating
    }

    /// Applies a raw user scroll (wheel, drag step). Returns the consumed delta.
    ///
    /// Does not cancel a running animation; both contributions add up.
    pub fn scroll_by(&mut self, delta_px: i64) -> i64 {
        let consumed = self.list.scroll_by(delta_px);
        if consumed != 0 {
            self.observe();
        }
        consumed
    }

    pub fn drag_start(&mut self) {
        self.velocity.reset();
        self.drag_remainder = 0.0;
        self.dragging = true;
    }

    /// Applies a drag step, in scroll direction (positive moves towards later items).
    pub fn drag(&mut self, now_ms: u64, delta_px: f32) -> i64 {
        if !self.dragging {
            self.drag_start();
        }
        self.velocity.add_delta(now_ms, delta_px);
        let total = delta_px + self.drag_remainder;
        let whole = total as i64;
        self.drag_remainder = total - whole as f32;
        self.scroll_by(whole)
    }

    /// Ends a drag and flings with the tracked release velocity.
    ///
    /// Returns the index the fling settles on.
    pub fn drag_end(&mut self) -> Option<usize> {
        let velocity = self.velocity.velocity();
        self.dragging = false;
        self.fling(velocity)
    }

    /// Ends a drag without velocity; the list snaps to the nearest item.
    pub fn drag_cancel(&mut self) -> Option<usize> {
        self.dragging = false;
        self.settle(0.0)
    }

    /// Flings with a raw velocity (px/s), then snaps onto an item boundary.
    ///
    /// Any running animation is cancelled first.
    pub fn fling(&mut self, velocity: f32) -> Option<usize> {
        let velocity = self.options.fling.adjust_velocity(velocity);
        self.settle(velocity)
    }

    fn settle(&mut self, velocity: f32) -> Option<usize> {
        let mut signal = external_signal(&mut self.controller, &self.options.on_external_scroll);
        self.animator.cancel(&mut signal);
        let target = self.options.fling.snap_target_index(
            &self.geometry,
            self.list.scroll_position(),
            velocity,
            self.options.count,
        )?;
        ptrace!(velocity, target, "fling");
        self.animator.scroll_to_item(target, &self.list, &mut signal);
        Some(target)
    }

    /// Tap-to-select: scrolls a non-selected item into the center slot.
    ///
    /// The selection itself is reported by the observer once the list passes the item.
    pub fn tap(&mut self, index: usize) -> bool {
        if index >= self.options.count || Some(index) == self.controller.selected() {
            return false;
        }
        self.scroll_to_item(index)
    }

    /// Animates `index` into the center slot without taking the external lock.
    pub fn scroll_to_item(&mut self, index: usize) -> bool {
        let mut signal = external_signal(&mut self.controller, &self.options.on_external_scroll);
        self.animator.scroll_to_item(index, &self.list, &mut signal)
    }

    fn observe(&mut self) {
        // Nothing to reconcile against until the host synced once and the items have a size.
        if self.host_selected.is_none() || self.geometry.main_axis_px() == 0 {
            return;
        }
        let position = self.list.scroll_position();
        let Some(candidate) = self.observer.observe(position) else {
            return;
        };
        let Some(index) = self.controller.on_candidate(candidate) else {
            ptrace!(candidate, locks = ?self.controller.locks(), "candidate discarded");
            return;
        };
        pdebug!(index, "selection emitted");
        if let Some(on_select) = &self.options.on_select {
            on_select(index);
        }
    }
}

impl<L> PickerEngine<L> {
    /// Cancels any animation in flight. Returns `true` if one was running.
    pub fn cancel_animation(&mut self) -> bool {
        let mut signal = external_signal(&mut self.controller, &self.options.on_external_scroll);
        self.animator.cancel(&mut signal)
    }

    /// Tears the instance down. Idempotent; also runs on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.cancel_animation();
        self.dragging = false;
        pdebug!("PickerEngine disposed");
    }
}

impl<L> Drop for PickerEngine<L> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn list_layout(geometry: &ItemGeometry, count: usize) -> ListLayout {
    ListLayout {
        item_count: count,
        item_size_px: geometry.main_axis_px(),
        content_padding_px: geometry.padding_px(),
        viewport_px: geometry.viewport_px(),
    }
}

/// Routes the animator's external-scroll signal into the external lock and the host listener.
fn external_signal<'a>(
    controller: &'a mut ReconciliationController,
    listener: &'a Option<OnExternalScrollCallback>,
) -> impl FnMut(bool) + 'a {
    move |in_progress| {
        controller.set_external_change_lock(in_progress);
        if let Some(listener) = listener {
            listener(in_progress);
        }
    }
}
