//! Dense per-page bookkeeping.
//!
//! One [`PageState`] slot per page, sized to the page count and rebuilt from
//! scratch whenever the count changes, so no stale percentage can outlive the
//! data set it was computed for.

/// What the dispatcher remembers about a single page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageState {
    /// 0.0 = fully shown (or never seen), 1.0 = fully left.
    pub leaved_percent: f32,
    /// A `deselected` event has gone out since the page was last selected.
    pub deselected: bool,
}

/// Per-index state table.
#[derive(Debug, Clone, Default)]
pub struct PageTable {
    slots: Vec<PageState>,
}

impl PageTable {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![PageState::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop all history and resize to `count` default slots.
    pub fn reset(&mut self, count: usize) {
        self.slots.clear();
        self.slots.resize(count, PageState::default());
    }

    /// State of page `index`; defaults for indices the table doesn't cover.
    pub fn get(&self, index: usize) -> PageState {
        self.slots.get(index).copied().unwrap_or_default()
    }

    pub fn leaved_percent(&self, index: usize) -> f32 {
        self.get(index).leaved_percent
    }

    pub fn is_deselected(&self, index: usize) -> bool {
        self.get(index).deselected
    }

    /// Out-of-range writes are ignored.
    pub fn set_leaved_percent(&mut self, index: usize, percent: f32) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.leaved_percent = percent;
        }
    }

    pub fn set_deselected(&mut self, index: usize, deselected: bool) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.deselected = deselected;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, PageState)> + '_ {
        self.slots.iter().copied().enumerate()
    }
}
