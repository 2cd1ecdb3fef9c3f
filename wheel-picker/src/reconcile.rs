/// Lock flags that keep scroll-driven and host-driven selection changes apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockState {
    /// Held while an external (host-requested) scroll animation is in flight.
    pub external_change: bool,
    /// Held from an emitted selection until the host echoes it back.
    pub internal_change: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconcileState {
    Idle,
    AnimatingExternal,
    SuppressingOneEmission,
}

/// What to do about a selection index pushed by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalChange {
    /// Animate the list to the index.
    ScrollTo(usize),
    /// The change echoes the engine's own emission; the internal lock was consumed.
    Echo,
    /// Out of range or missing; nothing to do.
    Skip,
}

/// The anti-feedback-loop state machine between host selection and observed scroll.
#[derive(Clone, Debug, Default)]
pub struct ReconciliationController {
    locks: LockState,
    selected: Option<usize>,
    count: usize,
}

impl ReconciliationController {
    pub fn new(count: usize) -> Self {
        Self {
            locks: LockState::default(),
            selected: None,
            count,
        }
    }

    pub fn locks(&self) -> LockState {
        self.locks
    }

    pub fn state(&self) -> ReconcileState {
        if self.locks.external_change {
            ReconcileState::AnimatingExternal
        } else if self.locks.internal_change {
            ReconcileState::SuppressingOneEmission
        } else {
            ReconcileState::Idle
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    pub fn set_external_change_lock(&mut self, locked: bool) {
        self.locks.external_change = locked;
    }

    /// Reacts to a new host selection. Call only when the host value actually changed.
    pub fn on_selected_changed(&mut self, selected: Option<usize>) -> ExternalChange {
        self.selected = selected;
        match selected {
            Some(index) if !self.locks.internal_change && index < self.count => {
                ExternalChange::ScrollTo(index)
            }
            _ if self.locks.internal_change => {
                self.locks.internal_change = false;
                ExternalChange::Echo
            }
            _ => ExternalChange::Skip,
        }
    }

    /// Filters an observed candidate; returns the index to report to the host, if any.
    ///
    /// Reporting takes the internal lock.
    pub fn on_candidate(&mut self, candidate: isize) -> Option<usize> {
        let index = usize::try_from(candidate)
            .ok()
            .filter(|&index| index < self.count)?;
        if Some(index) == self.selected
            || self.locks.external_change
            || self.locks.internal_change
        {
            return None;
        }
        self.locks.internal_change = true;
        Some(index)
    }
}
