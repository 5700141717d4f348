//! Raw signals reported by the paged-scroll host.

use std::fmt;

/// The host's three-state scroll lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    /// Nothing is moving; the committed page is authoritative.
    #[default]
    Idle,
    /// A finger (or the keyboard, in the demo) is moving the pages.
    Dragging,
    /// The pager is animating toward a page on its own.
    Settling,
}

impl ScrollPhase {
    pub const ALL: &[ScrollPhase] = &[
        ScrollPhase::Idle,
        ScrollPhase::Dragging,
        ScrollPhase::Settling,
    ];

    /// Lower-case name used in trace scripts and logs.
    pub fn label(self) -> &'static str {
        match self {
            ScrollPhase::Idle => "idle",
            ScrollPhase::Dragging => "dragging",
            ScrollPhase::Settling => "settling",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|phase| phase.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ScrollPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One raw host callback, as a value.
///
/// Hosts that buffer, replay or simulate scrolling hand these to
/// [`ScrollEventDispatcher::handle`](super::ScrollEventDispatcher::handle).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// Continuous progress: the left page and how far (`[0, 1)`) the
    /// viewport has moved past it toward the next one.
    Progress {
        position: usize,
        offset: f32,
        pixels: i32,
    },
    /// A page became the definitively selected one.
    Committed(usize),
    /// The scroll phase changed.
    Phase(ScrollPhase),
}

impl RawInput {
    /// Progress tick with no pixel information.
    pub fn progress(position: usize, offset: f32) -> Self {
        RawInput::Progress {
            position,
            offset,
            pixels: 0,
        }
    }
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInput::Progress {
                position, offset, ..
            } => write!(f, "scroll={position}:{offset:.3}"),
            RawInput::Committed(position) => write!(f, "commit={position}"),
            RawInput::Phase(phase) => write!(f, "phase={phase}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names_are_case_insensitive() {
        assert_eq!(ScrollPhase::from_name("Dragging"), Some(ScrollPhase::Dragging));
        assert_eq!(ScrollPhase::from_name("IDLE"), Some(ScrollPhase::Idle));
        assert_eq!(ScrollPhase::from_name("flinging"), None);
    }

    #[test]
    fn raw_input_display_matches_script_tokens() {
        assert_eq!(RawInput::progress(2, 0.25).to_string(), "scroll=2:0.250");
        assert_eq!(RawInput::Committed(4).to_string(), "commit=4");
        assert_eq!(
            RawInput::Phase(ScrollPhase::Settling).to_string(),
            "phase=settling"
        );
    }
}
