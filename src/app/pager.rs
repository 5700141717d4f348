//! Simulated paged-scroll host.
//!
//! Stands in for a platform pager: keyboard "drags" move a continuous scroll
//! position, releases and jumps settle toward a page with an exponential
//! ease-out, and every movement is reported as the raw callbacks a real
//! pager would emit, in the order it would emit them.

use pager_nav::core::{RawInput, ScrollPhase};

/// Remaining distance (in pages) below which a settle snaps to its target.
const SNAP_EPSILON: f64 = 0.002;

#[derive(Debug, Clone)]
pub struct PagerSim {
    page_count: usize,
    /// Continuous scroll position, in pages.
    position: f64,
    committed: usize,
    phase: ScrollPhase,
    /// Page a settle animation is heading for.
    target: Option<usize>,
    /// Damping: remaining distance `*= (1 - speed)` each tick.
    speed: f64,
    page_width: u16,
}

impl PagerSim {
    pub fn new(page_count: usize, speed: f64, page_width: u16) -> Self {
        Self {
            page_count,
            position: 0.0,
            committed: 0,
            phase: ScrollPhase::Idle,
            target: None,
            speed: speed.clamp(0.05, 0.95),
            page_width,
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn committed(&self) -> usize {
        self.committed
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    fn max_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    fn enter_phase(&mut self, phase: ScrollPhase, out: &mut Vec<RawInput>) {
        if self.phase != phase {
            self.phase = phase;
            out.push(RawInput::Phase(phase));
        }
    }

    fn commit(&mut self, page: usize, out: &mut Vec<RawInput>) {
        if self.committed != page {
            self.committed = page;
            out.push(RawInput::Committed(page));
        }
    }

    /// Current position split into the `(left page, offset, pixels)` triple.
    fn progress(&self) -> RawInput {
        let base = self.position.floor();
        let mut position = base as usize;
        let mut offset = (self.position - base) as f32;
        // f64 → f32 can round a hair-below-integer offset up to 1.0.
        if offset >= 1.0 {
            position += 1;
            offset = 0.0;
        }
        RawInput::Progress {
            position,
            offset,
            pixels: (offset * f32::from(self.page_width)).round() as i32,
        }
    }

    /// Move the pages by `delta` pages (positive = toward higher indices).
    pub fn drag_by(&mut self, delta: f32) -> Vec<RawInput> {
        let mut out = Vec::new();
        if self.page_count == 0 {
            return out;
        }
        self.target = None;
        self.enter_phase(ScrollPhase::Dragging, &mut out);

        let moved = (self.position + f64::from(delta)).clamp(0.0, self.max_page() as f64);
        if moved != self.position {
            self.position = moved;
            out.push(self.progress());
        }
        out
    }

    /// Let go of a drag; settle on the nearest page.
    pub fn release(&mut self) -> Vec<RawInput> {
        let mut out = Vec::new();
        if self.phase != ScrollPhase::Dragging {
            return out;
        }
        let page = (self.position.round() as usize).min(self.max_page());
        self.enter_phase(ScrollPhase::Settling, &mut out);
        self.commit(page, &mut out);
        self.target = Some(page);
        out
    }

    /// Animate to `page`, skimming over anything in between.
    pub fn smooth_scroll_to(&mut self, page: usize) -> Vec<RawInput> {
        let mut out = Vec::new();
        if self.page_count == 0 {
            return out;
        }
        let page = page.min(self.max_page());
        if page == self.committed && self.phase == ScrollPhase::Idle && self.position == page as f64 {
            return out;
        }
        self.enter_phase(ScrollPhase::Settling, &mut out);
        self.commit(page, &mut out);
        self.target = Some(page);
        out
    }

    /// Jump straight to `page` without animating.
    pub fn jump_to(&mut self, page: usize) -> Vec<RawInput> {
        let mut out = Vec::new();
        if self.page_count == 0 {
            return out;
        }
        let page = page.min(self.max_page());
        self.target = None;
        self.enter_phase(ScrollPhase::Idle, &mut out);
        self.commit(page, &mut out);
        self.position = page as f64;
        out.push(self.progress());
        out
    }

    /// Advance a settle animation by one frame.
    pub fn tick(&mut self) -> Vec<RawInput> {
        let mut out = Vec::new();
        let Some(target) = self.target else {
            return out;
        };

        let remaining = (target as f64 - self.position) * (1.0 - self.speed);
        if remaining.abs() < SNAP_EPSILON {
            self.position = target as f64;
            self.target = None;
            out.push(self.progress());
            self.enter_phase(ScrollPhase::Idle, &mut out);
        } else {
            self.position = target as f64 - remaining;
            out.push(self.progress());
        }
        out
    }

    /// The page collection changed size.  Pulls the pager back onto the
    /// last page if it was past the new end.
    pub fn set_page_count(&mut self, page_count: usize) -> Vec<RawInput> {
        let mut out = Vec::new();
        self.page_count = page_count;
        if page_count == 0 {
            self.position = 0.0;
            self.committed = 0;
            self.target = None;
            self.enter_phase(ScrollPhase::Idle, &mut out);
            return out;
        }
        if self.committed > self.max_page() || self.position > self.max_page() as f64 {
            let last = self.max_page();
            out.extend(self.jump_to(last));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settle(pager: &mut PagerSim) -> Vec<RawInput> {
        let mut out = Vec::new();
        for _ in 0..500 {
            if !pager.is_animating() {
                break;
            }
            out.extend(pager.tick());
        }
        assert!(!pager.is_animating(), "settle never finished");
        out
    }

    #[test]
    fn drag_reports_phase_once_then_progress() {
        let mut pager = PagerSim::new(3, 0.3, 100);

        let first = pager.drag_by(0.25);
        let second = pager.drag_by(0.25);

        assert_eq!(
            first,
            vec![
                RawInput::Phase(ScrollPhase::Dragging),
                RawInput::Progress {
                    position: 0,
                    offset: 0.25,
                    pixels: 25
                },
            ]
        );
        assert_eq!(
            second,
            vec![RawInput::Progress {
                position: 0,
                offset: 0.5,
                pixels: 50
            }]
        );
    }

    #[test]
    fn drag_is_clamped_to_the_page_range() {
        let mut pager = PagerSim::new(2, 0.3, 100);
        assert_eq!(pager.drag_by(-0.5), vec![RawInput::Phase(ScrollPhase::Dragging)]);
        pager.drag_by(5.0);
        assert_eq!(pager.position(), 1.0);
    }

    #[test]
    fn release_commits_nearest_page_and_settles_to_idle() {
        let mut pager = PagerSim::new(4, 0.5, 100);
        pager.drag_by(0.7);

        let released = pager.release();
        assert_eq!(
            released,
            vec![RawInput::Phase(ScrollPhase::Settling), RawInput::Committed(1)]
        );

        let frames = settle(&mut pager);
        let n = frames.len();
        assert!(n >= 3);
        assert_eq!(
            &frames[n - 2..],
            &[RawInput::progress(1, 0.0), RawInput::Phase(ScrollPhase::Idle)]
        );
        // Monotonic approach from 0.7 toward 1.0.
        for frame in &frames[..n - 2] {
            match frame {
                RawInput::Progress {
                    position: 0,
                    offset,
                    ..
                } => assert!(*offset > 0.7 && *offset < 1.0),
                other => panic!("unexpected {other:?}"),
            }
        }
        assert_eq!(pager.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn release_back_to_the_same_page_does_not_commit() {
        let mut pager = PagerSim::new(3, 0.5, 100);
        pager.drag_by(0.2);
        assert_eq!(pager.release(), vec![RawInput::Phase(ScrollPhase::Settling)]);
        let frames = settle(&mut pager);
        assert_eq!(frames.last(), Some(&RawInput::Phase(ScrollPhase::Idle)));
        assert_eq!(pager.committed(), 0);
    }

    #[test]
    fn smooth_scroll_commits_before_moving() {
        let mut pager = PagerSim::new(5, 0.3, 100);

        let started = pager.smooth_scroll_to(4);
        assert_eq!(
            started,
            vec![RawInput::Phase(ScrollPhase::Settling), RawInput::Committed(4)]
        );
        let frames = settle(&mut pager);
        // Passes over the intermediate pages on the way.
        let bases: Vec<usize> = frames
            .iter()
            .filter_map(|f| match f {
                RawInput::Progress { position, .. } => Some(*position),
                _ => None,
            })
            .collect();
        assert!(bases.contains(&1) && bases.contains(&2) && bases.contains(&3));
        assert_eq!(pager.position(), 4.0);

        assert!(pager.smooth_scroll_to(4).is_empty());
    }

    #[test]
    fn jump_goes_idle_then_commits_then_reports_rest_position() {
        let mut pager = PagerSim::new(5, 0.3, 100);
        pager.drag_by(0.4);

        assert_eq!(
            pager.jump_to(3),
            vec![
                RawInput::Phase(ScrollPhase::Idle),
                RawInput::Committed(3),
                RawInput::progress(3, 0.0),
            ]
        );
        assert!(!pager.is_animating());
    }

    #[test]
    fn shrinking_past_the_current_page_jumps_to_the_new_end() {
        let mut pager = PagerSim::new(5, 0.3, 100);
        pager.jump_to(4);

        assert_eq!(
            pager.set_page_count(3),
            vec![RawInput::Committed(2), RawInput::progress(2, 0.0)]
        );
        assert!(pager.set_page_count(6).is_empty());
        assert!(pager.set_page_count(0).is_empty());
        assert!(pager.drag_by(1.0).is_empty());
    }
}
