// Selection module
// Transient drag-selection indices into the current day-cell list

/// Start and end day indices of an in-progress drag.
///
/// Both are `None` while idle. The end may be numerically before the start
/// when the user drags backwards; ordering is settled when the event is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl SelectionState {
    pub fn begin(&mut self, day: usize) {
        self.start = Some(day);
        self.end = Some(day);
    }

    /// Move the end of an active selection; ignored while idle
    pub fn extend(&mut self, day: usize) -> bool {
        if self.start.is_none() {
            return false;
        }
        self.end = Some(day);
        true
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Both endpoints, in gesture order
    pub fn endpoints(&self) -> Option<(usize, usize)> {
        Some((self.start?, self.end?))
    }

    /// Inclusive index range covered by the selection, lowest first
    pub fn span(&self) -> Option<(usize, usize)> {
        let (start, end) = self.endpoints()?;
        Some((start.min(end), start.max(end)))
    }

    pub fn contains(&self, day: usize) -> bool {
        self.span()
            .is_some_and(|(low, high)| (low..=high).contains(&day))
    }
}
