//! Tab navigator — the host-side glue around the dispatcher.
//!
//! Owns a [`ScrollEventDispatcher`] whose registered listener is the
//! [`TitleBoard`]: one [`TitleView`] per tab that turns enter/leave/select
//! events into a colour blend and a selected flag.  Raw pager input is also
//! mirrored into an [`IndicatorState`] for the underline.

use std::collections::VecDeque;

use pager_nav::core::{NavError, NavEvent, RawInput, ScrollEventDispatcher, ScrollEventListener, ScrollPhase};

use crate::config::NavigatorConfig;

/// Derived events kept for the on-screen log.
const EVENT_LOG_CAPACITY: usize = 64;

// ───────────────────────────────────────── titles ────────────

/// Render state of one tab title.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleView {
    pub label: String,
    /// 0.0 = normal colour, 1.0 = selected colour.
    pub blend: f32,
    pub selected: bool,
}

impl TitleView {
    fn new(label: String) -> Self {
        Self {
            label,
            blend: 0.0,
            selected: false,
        }
    }
}

/// Listener that drives the title views and keeps a short event log.
#[derive(Debug, Default)]
pub struct TitleBoard {
    pub titles: Vec<TitleView>,
    log: VecDeque<NavEvent>,
}

impl TitleBoard {
    fn record(&mut self, event: NavEvent) {
        if self.log.len() == EVENT_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(event);
    }

    /// Oldest first.
    pub fn log(&self) -> impl DoubleEndedIterator<Item = &NavEvent> + ExactSizeIterator {
        self.log.iter()
    }
}

impl ScrollEventListener for TitleBoard {
    fn on_enter(&mut self, index: usize, total_count: usize, enter_percent: f32, left_to_right: bool) {
        if let Some(title) = self.titles.get_mut(index) {
            title.blend = enter_percent;
        }
        self.record(NavEvent::enter(index, total_count, enter_percent, left_to_right));
    }

    fn on_leave(&mut self, index: usize, total_count: usize, leave_percent: f32, left_to_right: bool) {
        if let Some(title) = self.titles.get_mut(index) {
            title.blend = 1.0 - leave_percent;
        }
        self.record(NavEvent::leave(index, total_count, leave_percent, left_to_right));
    }

    fn on_selected(&mut self, index: usize, total_count: usize) {
        if let Some(title) = self.titles.get_mut(index) {
            title.selected = true;
        }
        self.record(NavEvent::selected(index, total_count));
    }

    fn on_deselected(&mut self, index: usize, total_count: usize) {
        if let Some(title) = self.titles.get_mut(index) {
            title.selected = false;
        }
        self.record(NavEvent::deselected(index, total_count));
    }
}

// ───────────────────────────────────────── indicator ─────────

/// Last raw progress, for drawing the underline between two titles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorState {
    pub position: usize,
    pub offset: f32,
}

// ───────────────────────────────────────── navigator ─────────

#[derive(Debug)]
pub struct TabNavigator {
    dispatcher: ScrollEventDispatcher<TitleBoard>,
    indicator: IndicatorState,
    config: NavigatorConfig,
}

impl TabNavigator {
    pub fn new(config: NavigatorConfig, labels: Vec<String>) -> Self {
        let mut dispatcher = ScrollEventDispatcher::with_listener(TitleBoard::default());
        dispatcher.set_skim_over(config.skim_over);
        let mut navigator = Self {
            dispatcher,
            indicator: IndicatorState::default(),
            config,
        };
        navigator.set_titles(labels);
        navigator
    }

    /// Replace the tab set.  All per-page history is dropped.
    pub fn set_titles(&mut self, labels: Vec<String>) {
        self.dispatcher.set_total_count(labels.len());
        if let Some(board) = self.dispatcher.listener_mut() {
            board.titles = labels.into_iter().map(TitleView::new).collect();
        }
        if self.indicator.position >= self.dispatcher.total_count() {
            self.indicator = IndicatorState {
                position: self.dispatcher.total_count().saturating_sub(1),
                offset: 0.0,
            };
        }
    }

    /// Forward one raw pager callback.
    pub fn apply(&mut self, input: RawInput) -> Result<(), NavError> {
        self.dispatcher.handle(input)?;
        if let RawInput::Progress {
            position, offset, ..
        } = input
        {
            self.indicator = IndicatorState { position, offset };
        }
        Ok(())
    }

    /// Re-select the current tab after a layout pass so title state matches
    /// the pager even if events were missed while nothing was laid out.
    pub fn relayout(&mut self) -> Result<(), NavError> {
        if !self.config.reselect_when_layout
            || self.dispatcher.scroll_phase() != ScrollPhase::Idle
            || self.dispatcher.total_count() == 0
        {
            return Ok(());
        }
        let current = self.dispatcher.current_index();
        self.dispatcher.on_page_committed(current)?;
        self.dispatcher.on_scroll_progress(current, 0.0, 0)
    }

    pub fn set_skim_over(&mut self, skim_over: bool) {
        self.config.skim_over = skim_over;
        self.dispatcher.set_skim_over(skim_over);
    }

    pub fn skim_over(&self) -> bool {
        self.dispatcher.skim_over()
    }

    /// Horizontal strip offset that keeps the indicator at the scroll pivot.
    /// `columns` holds each title's `(start, width)` in strip cells.
    /// Clamped so the strip never scrolls past either end.
    /// `None` when follow-touch is off or there is nothing to follow.
    pub fn scroll_target(&self, viewport_width: u16, columns: &[(u16, u16)]) -> Option<u16> {
        let (&(last_start, last_width), _) = columns.split_last()?;
        if !self.config.follow_touch {
            return None;
        }
        let last = columns.len() - 1;
        let max_offset = last_start.saturating_add(last_width).saturating_sub(viewport_width);
        let center = |i: usize| {
            let (start, width) = columns[i.min(last)];
            f32::from(start) + f32::from(width) / 2.0
        };
        let current = center(self.indicator.position);
        let next = center(self.indicator.position + 1);
        let pivot = f32::from(viewport_width) * self.config.scroll_pivot_x.clamp(0.0, 1.0);
        let target = current + (next - current) * self.indicator.offset - pivot;
        Some(target.clamp(0.0, f32::from(max_offset)).round() as u16)
    }

    pub fn titles(&self) -> &[TitleView] {
        self.dispatcher
            .listener()
            .map(|board| board.titles.as_slice())
            .unwrap_or_default()
    }

    pub fn board(&self) -> Option<&TitleBoard> {
        self.dispatcher.listener()
    }

    pub fn indicator(&self) -> IndicatorState {
        self.indicator
    }

    pub fn dispatcher(&self) -> &ScrollEventDispatcher<TitleBoard> {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Tab {i}")).collect()
    }

    fn navigator(n: usize) -> TabNavigator {
        TabNavigator::new(NavigatorConfig::default(), labels(n))
    }

    #[test]
    fn relayout_selects_and_fully_enters_the_current_tab() {
        let mut nav = navigator(3);

        nav.relayout().unwrap();

        let titles = nav.titles();
        assert!(titles[0].selected);
        assert_eq!(titles[0].blend, 1.0);
        for title in &titles[1..] {
            assert!(!title.selected);
            assert_eq!(title.blend, 0.0);
        }
    }

    #[test]
    fn relayout_is_skipped_while_moving_or_when_disabled() {
        let mut nav = navigator(3);
        nav.apply(RawInput::Phase(ScrollPhase::Dragging)).unwrap();
        nav.relayout().unwrap();
        assert_eq!(nav.board().map(|b| b.log().len()), Some(0));

        let config = NavigatorConfig {
            reselect_when_layout: false,
            ..NavigatorConfig::default()
        };
        let mut nav = TabNavigator::new(config, labels(3));
        nav.relayout().unwrap();
        assert_eq!(nav.board().map(|b| b.log().len()), Some(0));
    }

    #[test]
    fn drag_blends_outgoing_and_incoming_titles() {
        let mut nav = navigator(3);
        nav.relayout().unwrap();

        nav.apply(RawInput::Phase(ScrollPhase::Dragging)).unwrap();
        nav.apply(RawInput::progress(0, 0.25)).unwrap();

        let titles = nav.titles();
        assert_eq!(titles[0].blend, 0.75);
        assert_eq!(titles[1].blend, 0.25);
        assert_eq!(
            nav.indicator(),
            IndicatorState {
                position: 0,
                offset: 0.25
            }
        );
    }

    #[test]
    fn rejected_input_leaves_indicator_alone() {
        let mut nav = navigator(2);
        assert!(nav.apply(RawInput::progress(5, 0.5)).is_err());
        assert_eq!(nav.indicator(), IndicatorState::default());
    }

    #[test]
    fn new_titles_reset_render_state() {
        let mut nav = navigator(3);
        nav.relayout().unwrap();

        nav.set_titles(labels(2));

        assert_eq!(nav.titles().len(), 2);
        assert!(nav.titles().iter().all(|t| !t.selected && t.blend == 0.0));
        assert_eq!(nav.dispatcher().total_count(), 2);
    }

    #[test]
    fn event_log_is_bounded() {
        let mut nav = navigator(40);
        for _ in 0..3 {
            nav.relayout().unwrap();
        }
        let log: Vec<_> = nav.board().map(|b| b.log().copied().collect()).unwrap_or_default();
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        assert_eq!(log.last(), Some(&NavEvent::selected(0, 40)));
    }

    #[test]
    fn scroll_target_follows_indicator_around_the_pivot() {
        let mut nav = navigator(3);
        let columns = [(0, 10), (10, 10), (20, 20)];

        // Tab 0 centre is 5; a 5-wide viewport pivots at 2.5.
        assert_eq!(nav.scroll_target(5, &columns), Some(3));

        nav.apply(RawInput::Phase(ScrollPhase::Dragging)).unwrap();
        nav.apply(RawInput::progress(1, 0.5)).unwrap();
        // Halfway between centres 15 and 30.
        assert_eq!(nav.scroll_target(5, &columns), Some(20));

        // Never scrolls before the start of the strip.
        assert_eq!(nav.scroll_target(200, &columns), Some(0));

        let config = NavigatorConfig {
            follow_touch: false,
            ..NavigatorConfig::default()
        };
        assert_eq!(TabNavigator::new(config, labels(3)).scroll_target(5, &columns), None);
    }

    #[test]
    fn scroll_target_stops_at_the_end_of_the_strip() {
        let mut nav = navigator(3);
        let columns = [(0, 10), (10, 10), (20, 10)];

        nav.apply(RawInput::Phase(ScrollPhase::Settling)).unwrap();
        nav.apply(RawInput::Committed(2)).unwrap();
        nav.apply(RawInput::progress(2, 0.0)).unwrap();
        nav.apply(RawInput::Phase(ScrollPhase::Idle)).unwrap();

        // Centre 25 minus pivot 10 would be 15; a 30-wide strip in a
        // 20-wide viewport can only scroll by 10.
        assert_eq!(nav.scroll_target(20, &columns), Some(10));
        // Strip narrower than the viewport never scrolls.
        assert_eq!(nav.scroll_target(40, &columns), Some(0));
    }

    #[test]
    fn skim_over_toggle_reaches_the_dispatcher() {
        let mut nav = navigator(3);
        assert!(!nav.skim_over());
        nav.set_skim_over(true);
        assert!(nav.dispatcher().skim_over());
    }
}
