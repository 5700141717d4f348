//! Tab strip widget — titles coloured by their blend, plus an underline
//! that slides between titles with the raw scroll progress.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
};

use crate::app::navigator::{IndicatorState, TitleView};

use super::theme::Theme;

/// Blank cells either side of each label.
const PAD: u16 = 1;
const UNDERLINE: char = '━';

/// Created fresh each frame.
pub struct TabStrip<'a> {
    titles: &'a [TitleView],
    indicator: IndicatorState,
    /// First strip column shown at the left edge.
    offset: u16,
    block: Option<Block<'a>>,
}

impl<'a> TabStrip<'a> {
    pub fn new(titles: &'a [TitleView], indicator: IndicatorState) -> Self {
        Self {
            titles,
            indicator,
            offset: 0,
            block: None,
        }
    }

    pub fn offset(mut self, offset: u16) -> Self {
        self.offset = offset;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// `(start, width)` of every title in strip columns.
    pub fn columns(titles: &[TitleView]) -> Vec<(u16, u16)> {
        let mut start = 0u16;
        titles
            .iter()
            .map(|t| {
                let width = (t.label.chars().count() as u16).saturating_add(2 * PAD);
                let col = (start, width);
                start = start.saturating_add(width);
                col
            })
            .collect()
    }

    /// Underline `(start, width)`, interpolated from the current title toward
    /// the next one by the indicator offset.
    pub fn underline(columns: &[(u16, u16)], indicator: IndicatorState) -> Option<(u16, u16)> {
        let last = columns.len().checked_sub(1)?;
        let (s0, w0) = columns[indicator.position.min(last)];
        let (s1, w1) = columns[(indicator.position + 1).min(last)];
        let t = indicator.offset.clamp(0.0, 1.0);
        let lerp = |a: u16, b: u16| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u16;
        Some((lerp(s0, s1), lerp(w0, w1)))
    }
}

impl Widget for TabStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let offset = self.offset;
        let mut put = |col: u16, row: u16, ch: char, style: Style| {
            if col < offset || col - offset >= inner.width {
                return;
            }
            if let Some(cell) = buf.cell_mut((inner.x + col - offset, inner.y + row)) {
                cell.set_char(ch).set_style(style);
            }
        };

        let columns = Self::columns(self.titles);
        for (title, &(start, _)) in self.titles.iter().zip(&columns) {
            let style = Theme::title_style(title.blend, title.selected);
            for (i, ch) in title.label.chars().enumerate() {
                put(start + PAD + i as u16, 0, ch, style);
            }
        }

        if inner.height < 2 {
            return;
        }
        if let Some((start, width)) = Self::underline(&columns, self.indicator) {
            for col in start..start.saturating_add(width) {
                put(col, 1, UNDERLINE, Theme::indicator_style());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(labels: &[&str]) -> Vec<TitleView> {
        labels
            .iter()
            .map(|l| TitleView {
                label: l.to_string(),
                blend: 0.0,
                selected: false,
            })
            .collect()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn columns_are_packed_with_padding() {
        let t = titles(&["ab", "cde", ""]);
        assert_eq!(TabStrip::columns(&t), vec![(0, 4), (4, 5), (9, 2)]);
    }

    #[test]
    fn underline_slides_between_neighbours() {
        let columns = [(0, 4), (4, 8)];
        let at = |position, offset| TabStrip::underline(&columns, IndicatorState { position, offset });
        assert_eq!(at(0, 0.0), Some((0, 4)));
        assert_eq!(at(0, 0.5), Some((2, 6)));
        // Past the last title the underline parks on it.
        assert_eq!(at(1, 0.5), Some((4, 8)));
        assert_eq!(TabStrip::underline(&[], IndicatorState::default()), None);
    }

    #[test]
    fn renders_titles_and_underline() {
        let t = titles(&["ab", "cd"]);
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);

        TabStrip::new(&t, IndicatorState::default()).render(area, &mut buf);

        assert_eq!(row(&buf, 0), " ab  cd   ");
        assert_eq!(row(&buf, 1), "━━━━      ");
    }

    #[test]
    fn offset_scrolls_the_strip_left() {
        let t = titles(&["ab", "cd"]);
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        TabStrip::new(&t, IndicatorState::default())
            .offset(4)
            .render(area, &mut buf);

        assert_eq!(row(&buf, 0), " cd ");
    }
}
