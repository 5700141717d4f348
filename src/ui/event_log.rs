//! Scrolling log of the derived navigation events, newest at the bottom.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use pager_nav::core::NavEvent;

use super::theme::Theme;

pub struct EventLog<'a, I> {
    events: I,
    block: Option<Block<'a>>,
}

impl<'a, I> EventLog<'a, I>
where
    I: DoubleEndedIterator<Item = &'a NavEvent>,
{
    /// `events` oldest first.
    pub fn new(events: I) -> Self {
        Self {
            events,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

fn event_line(event: &NavEvent) -> Line<'static> {
    let style = match event {
        NavEvent::Enter { .. } => Theme::enter_style(),
        NavEvent::Leave { .. } => Theme::leave_style(),
        NavEvent::Selected { .. } => Theme::selected_style(),
        NavEvent::Deselected { .. } => Theme::deselected_style(),
    };
    Line::from(Span::styled(event.to_string(), style))
}

impl<'a, I> Widget for EventLog<'a, I>
where
    I: DoubleEndedIterator<Item = &'a NavEvent>,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = match &self.block {
            Some(block) => block.inner(area).height,
            None => area.height,
        } as usize;

        let mut lines: Vec<Line> = self.events.rev().take(rows).map(event_line).collect();
        lines.reverse();

        let mut paragraph = Paragraph::new(lines);
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
