//! Listener contract for derived navigation events.

use std::fmt;

/// Receives the four derived events, synchronously, on the caller's thread.
///
/// Implementations only ever see `&mut self`, never the dispatcher, so a
/// callback cannot feed input back into the dispatcher mid-dispatch.
pub trait ScrollEventListener {
    /// Page `index` is `enter_percent` of the way toward fully shown.
    fn on_enter(&mut self, index: usize, total_count: usize, enter_percent: f32, left_to_right: bool);

    /// Page `index` is `leave_percent` of the way toward fully left.
    fn on_leave(&mut self, index: usize, total_count: usize, leave_percent: f32, left_to_right: bool);

    fn on_selected(&mut self, index: usize, total_count: usize);

    fn on_deselected(&mut self, index: usize, total_count: usize);
}

impl<L: ScrollEventListener + ?Sized> ScrollEventListener for Box<L> {
    fn on_enter(&mut self, index: usize, total_count: usize, enter_percent: f32, left_to_right: bool) {
        (**self).on_enter(index, total_count, enter_percent, left_to_right);
    }

    fn on_leave(&mut self, index: usize, total_count: usize, leave_percent: f32, left_to_right: bool) {
        (**self).on_leave(index, total_count, leave_percent, left_to_right);
    }

    fn on_selected(&mut self, index: usize, total_count: usize) {
        (**self).on_selected(index, total_count);
    }

    fn on_deselected(&mut self, index: usize, total_count: usize) {
        (**self).on_deselected(index, total_count);
    }
}

// ───────────────────────────────────────── event values ──────

/// A listener callback captured as a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    Enter {
        index: usize,
        total_count: usize,
        percent: f32,
        left_to_right: bool,
    },
    Leave {
        index: usize,
        total_count: usize,
        percent: f32,
        left_to_right: bool,
    },
    Selected { index: usize, total_count: usize },
    Deselected { index: usize, total_count: usize },
}

impl NavEvent {
    pub fn index(&self) -> usize {
        match *self {
            NavEvent::Enter { index, .. }
            | NavEvent::Leave { index, .. }
            | NavEvent::Selected { index, .. }
            | NavEvent::Deselected { index, .. } => index,
        }
    }

    pub fn enter(index: usize, total_count: usize, percent: f32, left_to_right: bool) -> Self {
        NavEvent::Enter {
            index,
            total_count,
            percent,
            left_to_right,
        }
    }

    pub fn leave(index: usize, total_count: usize, percent: f32, left_to_right: bool) -> Self {
        NavEvent::Leave {
            index,
            total_count,
            percent,
            left_to_right,
        }
    }

    pub fn selected(index: usize, total_count: usize) -> Self {
        NavEvent::Selected { index, total_count }
    }

    pub fn deselected(index: usize, total_count: usize) -> Self {
        NavEvent::Deselected { index, total_count }
    }
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = |ltr: bool| if ltr { "→" } else { "←" };
        match *self {
            NavEvent::Enter {
                index,
                total_count,
                percent,
                left_to_right,
            } => write!(
                f,
                "enter      #{index}/{total_count} {percent:.3} {}",
                arrow(left_to_right)
            ),
            NavEvent::Leave {
                index,
                total_count,
                percent,
                left_to_right,
            } => write!(
                f,
                "leave      #{index}/{total_count} {percent:.3} {}",
                arrow(left_to_right)
            ),
            NavEvent::Selected { index, total_count } => {
                write!(f, "selected   #{index}/{total_count}")
            }
            NavEvent::Deselected { index, total_count } => {
                write!(f, "deselected #{index}/{total_count}")
            }
        }
    }
}

// ───────────────────────────────────────── recorder ──────────

/// Listener that keeps every callback, in order.
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    pub events: Vec<NavEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand back everything recorded so far and start over.
    pub fn drain(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }
}

impl ScrollEventListener for EventRecorder {
    fn on_enter(&mut self, index: usize, total_count: usize, enter_percent: f32, left_to_right: bool) {
        self.events
            .push(NavEvent::enter(index, total_count, enter_percent, left_to_right));
    }

    fn on_leave(&mut self, index: usize, total_count: usize, leave_percent: f32, left_to_right: bool) {
        self.events
            .push(NavEvent::leave(index, total_count, leave_percent, left_to_right));
    }

    fn on_selected(&mut self, index: usize, total_count: usize) {
        self.events.push(NavEvent::selected(index, total_count));
    }

    fn on_deselected(&mut self, index: usize, total_count: usize) {
        self.events.push(NavEvent::deselected(index, total_count));
    }
}
