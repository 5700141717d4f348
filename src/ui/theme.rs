//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    /// Title colour when a tab is fully left.
    const TITLE_NORMAL: (u8, u8, u8) = (0x88, 0x88, 0x88);
    /// Title colour when a tab is fully entered.
    const TITLE_SELECTED: (u8, u8, u8) = (0xff, 0xc8, 0x3d);

    // ── tab strip ──────────────────────────────────────────────

    /// Linear blend between the normal and selected title colours.
    pub fn title_style(blend: f32, selected: bool) -> Style {
        let t = blend.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        let (r0, g0, b0) = Self::TITLE_NORMAL;
        let (r1, g1, b1) = Self::TITLE_SELECTED;
        let style = Style::default().fg(Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1)));
        if selected {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn indicator_style() -> Style {
        Style::default().fg(Color::Rgb(
            Self::TITLE_SELECTED.0,
            Self::TITLE_SELECTED.1,
            Self::TITLE_SELECTED.2,
        ))
    }

    // ── event log ──────────────────────────────────────────────

    pub fn enter_style() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn leave_style() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn selected_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn deselected_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // ── chrome ─────────────────────────────────────────────────

    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
