//! The scroll event dispatcher.
//!
//! Consumes the host's three raw signals and emits `enter` / `leave` /
//! `selected` / `deselected` for every page, in a fixed order:
//!
//! * While the pager moves (phase ≠ Idle) every page other than the two
//!   straddling the viewport is swept to "fully left" first, then the
//!   outgoing page gets its `leave` and the incoming page its `enter`.
//! * Once the pager is idle, the committed page is authoritative: all other
//!   pages are deselected and fully left, then the committed page is fully
//!   entered and selected.
//!
//! Each page's leave percentage is remembered so repeated ticks don't spam
//! already-settled pages.

use std::fmt;

use super::error::NavError;
use super::input::{RawInput, ScrollPhase};
use super::listener::ScrollEventListener;
use super::pages::PageTable;

/// Fully left / fully entered.
const FULL: f32 = 1.0;

/// Derives page lifecycle events from raw paged-scroll progress.
///
/// `L` is the single registered listener.  With no listener the table is
/// still kept current, so a listener attached later starts from real state.
pub struct ScrollEventDispatcher<L = Box<dyn ScrollEventListener>> {
    pages: PageTable,
    total_count: usize,
    current_index: usize,
    last_index: usize,
    last_position_offset_sum: f32,
    scroll_phase: ScrollPhase,
    /// Pages skimmed over during a multi-page settle still get continuous
    /// `enter` / `leave` instead of a single forced snapshot.
    skim_over: bool,
    listener: Option<L>,
}

impl<L> Default for ScrollEventDispatcher<L> {
    fn default() -> Self {
        Self {
            pages: PageTable::default(),
            total_count: 0,
            current_index: 0,
            last_index: 0,
            last_position_offset_sum: 0.0,
            scroll_phase: ScrollPhase::Idle,
            skim_over: false,
            listener: None,
        }
    }
}

impl<L> fmt::Debug for ScrollEventDispatcher<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollEventDispatcher")
            .field("total_count", &self.total_count)
            .field("current_index", &self.current_index)
            .field("last_index", &self.last_index)
            .field("last_position_offset_sum", &self.last_position_offset_sum)
            .field("scroll_phase", &self.scroll_phase)
            .field("skim_over", &self.skim_over)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl<L: ScrollEventListener> ScrollEventDispatcher<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(listener: L) -> Self {
        Self {
            listener: Some(listener),
            ..Self::default()
        }
    }

    // ── listener ────────────────────────────────────────────────

    /// Register `listener`, replacing (and returning) any previous one.
    pub fn set_listener(&mut self, listener: L) -> Option<L> {
        self.listener.replace(listener)
    }

    pub fn take_listener(&mut self) -> Option<L> {
        self.listener.take()
    }

    pub fn listener(&self) -> Option<&L> {
        self.listener.as_ref()
    }

    pub fn listener_mut(&mut self) -> Option<&mut L> {
        self.listener.as_mut()
    }

    // ── configuration ───────────────────────────────────────────

    pub fn set_skim_over(&mut self, skim_over: bool) {
        self.skim_over = skim_over;
    }

    pub fn skim_over(&self) -> bool {
        self.skim_over
    }

    /// Set the page count.  Clears every page's history; selection indices,
    /// phase and the last scroll position are left as they are.
    pub fn set_total_count(&mut self, total_count: usize) {
        tracing::debug!(
            "page count {} -> {}, per-page state cleared",
            self.total_count,
            total_count
        );
        self.total_count = total_count;
        self.pages.reset(total_count);
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn scroll_phase(&self) -> ScrollPhase {
        self.scroll_phase
    }

    /// Read-only view of the per-page table.
    pub fn pages(&self) -> &PageTable {
        &self.pages
    }

    // ── raw inputs ──────────────────────────────────────────────

    /// Route a buffered raw input to the matching input method.
    pub fn handle(&mut self, input: RawInput) -> Result<(), NavError> {
        match input {
            RawInput::Progress {
                position,
                offset,
                pixels,
            } => self.on_scroll_progress(position, offset, pixels),
            RawInput::Committed(position) => self.on_page_committed(position),
            RawInput::Phase(phase) => {
                self.on_scroll_phase_changed(phase);
                Ok(())
            }
        }
    }

    /// Continuous progress: `position` is the left page, `position_offset`
    /// in `[0, 1)` how far the viewport has moved past it.
    /// `_position_offset_pixels` is accepted for parity with host callbacks.
    pub fn on_scroll_progress(
        &mut self,
        position: usize,
        position_offset: f32,
        _position_offset_pixels: i32,
    ) -> Result<(), NavError> {
        self.check_index(position)?;

        let sum = position as f32 + position_offset;
        let left_to_right = self.last_position_offset_sum <= sum;

        if self.scroll_phase != ScrollPhase::Idle {
            if sum == self.last_position_offset_sum {
                return Ok(());
            }

            // An offset of exactly zero while moving right means the host
            // already advanced `position`; the page we came from is behind it.
            let (next, normal) = if position_offset == 0.0 && left_to_right {
                (position.checked_sub(1), false)
            } else {
                (Some(position + 1), true)
            };

            for i in 0..self.total_count {
                if i == position || Some(i) == next {
                    continue;
                }
                if self.pages.leaved_percent(i) != FULL {
                    self.dispatch_leave(i, FULL, left_to_right, true);
                }
            }

            if normal && left_to_right {
                self.dispatch_leave(position, position_offset, left_to_right, false);
                if let Some(next) = next {
                    self.dispatch_enter(next, position_offset, left_to_right, false);
                }
            } else {
                if let Some(next) = next {
                    self.dispatch_leave(next, FULL - position_offset, left_to_right, false);
                }
                self.dispatch_enter(position, FULL - position_offset, left_to_right, false);
            }
        } else {
            let current = self.current_index;
            for i in 0..self.total_count {
                if i == current {
                    continue;
                }
                if !self.pages.is_deselected(i) {
                    self.dispatch_deselected(i);
                }
                if self.pages.leaved_percent(i) != FULL {
                    self.dispatch_leave(i, FULL, false, true);
                }
            }
            self.dispatch_enter(current, FULL, false, true);
            self.dispatch_selected(current);
        }

        self.last_position_offset_sum = sum;
        Ok(())
    }

    /// `position` became the selected page.
    pub fn on_page_committed(&mut self, position: usize) -> Result<(), NavError> {
        self.check_index(position)?;
        tracing::debug!("commit {} (was {})", position, self.current_index);

        self.last_index = self.current_index;
        self.current_index = position;

        self.dispatch_selected(position);
        for i in 0..self.total_count {
            if i != position && !self.pages.is_deselected(i) {
                self.dispatch_deselected(i);
            }
        }
        Ok(())
    }

    /// Store the host's phase.  Affects later progress ticks only.
    pub fn on_scroll_phase_changed(&mut self, phase: ScrollPhase) {
        if phase != self.scroll_phase {
            tracing::debug!("scroll phase {} -> {}", self.scroll_phase, phase);
        }
        self.scroll_phase = phase;
    }

    // ── dispatch ────────────────────────────────────────────────

    fn check_index(&self, index: usize) -> Result<(), NavError> {
        if index < self.total_count {
            Ok(())
        } else {
            tracing::debug!(
                "rejecting page {} (only {} pages)",
                index,
                self.total_count
            );
            Err(NavError::InvalidIndex {
                index,
                total_count: self.total_count,
            })
        }
    }

    fn dispatch_enter(&mut self, index: usize, enter_percent: f32, left_to_right: bool, forced: bool) {
        if index >= self.total_count {
            tracing::trace!("enter #{} skipped: past the last page", index);
            return;
        }
        let allowed = self.skim_over
            || index == self.current_index
            || self.scroll_phase == ScrollPhase::Dragging
            || forced;
        if !allowed {
            tracing::trace!("enter #{} {:.3} gated", index, enter_percent);
            return;
        }

        tracing::trace!(
            "enter #{} {:.3} ltr={} forced={}",
            index,
            enter_percent,
            left_to_right,
            forced
        );
        if let Some(listener) = self.listener.as_mut() {
            listener.on_enter(index, self.total_count, enter_percent, left_to_right);
        }
        self.pages.set_leaved_percent(index, FULL - enter_percent);
    }

    fn dispatch_leave(&mut self, index: usize, leave_percent: f32, left_to_right: bool, forced: bool) {
        if index >= self.total_count {
            tracing::trace!("leave #{} skipped: past the last page", index);
            return;
        }
        let adjacent = index + 1 == self.current_index || index == self.current_index + 1;
        let allowed = self.skim_over
            || index == self.last_index
            || self.scroll_phase == ScrollPhase::Dragging
            || (adjacent && self.pages.leaved_percent(index) != FULL)
            || forced;
        if !allowed {
            tracing::trace!("leave #{} {:.3} gated", index, leave_percent);
            return;
        }

        tracing::trace!(
            "leave #{} {:.3} ltr={} forced={}",
            index,
            leave_percent,
            left_to_right,
            forced
        );
        if let Some(listener) = self.listener.as_mut() {
            listener.on_leave(index, self.total_count, leave_percent, left_to_right);
        }
        self.pages.set_leaved_percent(index, leave_percent);
    }

    fn dispatch_selected(&mut self, index: usize) {
        // `current_index` survives a shrinking page count.
        if index >= self.total_count {
            tracing::trace!("selected #{} skipped: past the last page", index);
            return;
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_selected(index, self.total_count);
        }
        self.pages.set_deselected(index, false);
    }

    fn dispatch_deselected(&mut self, index: usize) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_deselected(index, self.total_count);
        }
        self.pages.set_deselected(index, true);
    }
}
